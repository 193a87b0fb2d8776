//! Source lexing for tree construction.
//!
//! Uses the `sqlparser` tokenizer and converts its line/column spans into
//! byte offsets. Whitespace and comments are dropped; a synthetic
//! end-of-input token is appended so trees can end the way the grammar's
//! root rule does.

use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token as SqlToken, TokenWithSpan, Tokenizer};

use super::kind::TokenKind;
use super::tree::Token;
use crate::error::TreeError;
use crate::types::{Dialect, Span};

/// Lexes `source` into tokens, end-of-input last.
pub(crate) fn lex(source: &str, dialect: Dialect) -> Result<Vec<Token>, TreeError> {
    let sql_dialect = dialect.to_sqlparser_dialect();
    let mut tokenizer = Tokenizer::new(sql_dialect.as_ref(), source);
    let lexed: Vec<TokenWithSpan> = tokenizer
        .tokenize_with_location()
        .map_err(|error| TreeError::Lexer(error.to_string()))?;

    let mut tokens = Vec::with_capacity(lexed.len() + 1);
    let mut cursor = SourceCursor::new(source);
    for item in lexed {
        if matches!(item.token, SqlToken::Whitespace(_) | SqlToken::EOF) {
            continue;
        }

        let line = item.span.start.line as usize;
        let column = item.span.start.column as usize;
        let out_of_range = TreeError::TokenOutOfRange { line, column };
        let start = cursor.seek(line, column).ok_or(out_of_range.clone())?;
        let end = cursor
            .seek(item.span.end.line as usize, item.span.end.column as usize)
            .ok_or(out_of_range.clone())?;
        let text = source.get(start..end).ok_or(out_of_range)?;

        tokens.push(Token {
            kind: classify_token(&item.token),
            text: text.to_string(),
            span: Span::new(start, end),
            line,
            column,
        });
    }

    tokens.push(end_of_input(source));
    Ok(tokens)
}

fn end_of_input(source: &str) -> Token {
    let line = 1 + source.matches('\n').count();
    let last_line = source.rsplit('\n').next().unwrap_or_default();
    Token {
        kind: TokenKind::Eof,
        text: String::new(),
        span: Span::new(source.len(), source.len()),
        line,
        column: last_line.chars().count() + 1,
    }
}

fn classify_token(token: &SqlToken) -> TokenKind {
    match token {
        SqlToken::Word(word) if word.quote_style.is_some() => TokenKind::Identifier,
        SqlToken::Word(word) => match word.keyword {
            Keyword::BETWEEN => TokenKind::Between,
            Keyword::IN => TokenKind::In,
            Keyword::AND => TokenKind::And,
            Keyword::OR => TokenKind::Or,
            Keyword::NOT => TokenKind::Not,
            Keyword::CROSS => TokenKind::Cross,
            Keyword::NoKeyword => TokenKind::Identifier,
            _ => TokenKind::Keyword,
        },
        SqlToken::Number(_, _) => TokenKind::Number,
        SqlToken::SingleQuotedString(_)
        | SqlToken::NationalStringLiteral(_)
        | SqlToken::EscapedStringLiteral(_)
        | SqlToken::HexStringLiteral(_)
        | SqlToken::DollarQuotedString(_) => TokenKind::String,
        SqlToken::Eq
        | SqlToken::DoubleEq
        | SqlToken::Neq
        | SqlToken::Lt
        | SqlToken::Gt
        | SqlToken::LtEq
        | SqlToken::GtEq => TokenKind::Comparison,
        SqlToken::Plus
        | SqlToken::Minus
        | SqlToken::Div
        | SqlToken::Mod
        | SqlToken::StringConcat
        | SqlToken::DoubleColon => TokenKind::Operator,
        SqlToken::Mul => TokenKind::Star,
        SqlToken::LParen => TokenKind::OpenParen,
        SqlToken::RParen => TokenKind::CloseParen,
        SqlToken::Comma => TokenKind::Comma,
        SqlToken::Period => TokenKind::Period,
        SqlToken::SemiColon => TokenKind::Semicolon,
        _ => TokenKind::Other,
    }
}

/// Maps 1-based line/column positions (columns in characters) to byte
/// offsets by walking the source forward.
///
/// Tokens arrive in source order, so every lookup continues from the
/// previous one and the whole script is walked once.
struct SourceCursor<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> SourceCursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves to `line`:`column` and returns its byte offset.
    ///
    /// Positions behind the cursor or past the end of their line have no
    /// offset.
    fn seek(&mut self, line: usize, column: usize) -> Option<usize> {
        if column == 0 || (line, column) < (self.line, self.column) {
            return None;
        }

        while (self.line, self.column) < (line, column) {
            let ch = self.source.get(self.offset..)?.chars().next()?;
            if ch == '\n' {
                if self.line == line {
                    return None;
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += ch.len_utf8();
        }

        Some(self.offset)
    }
}
