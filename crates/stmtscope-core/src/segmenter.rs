//! Statement segmentation over a concrete parse tree.
//!
//! A single depth-first pass splits a script at terminator tokens, rebuilds
//! each statement's text, rewrites sugar calls into regular call form and
//! finds the statement that encloses the caret. Terminators inside a
//! transaction block (between BEGIN and the matching END) do not split, so
//! the block comes back as one statement.
//!
//! All state lives in one `Segmenter` per call; nothing is shared
//! between calls.

use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

use crate::error::SegmentError;
use crate::syntax::{Child, Node, NodeKind, SyntaxTree, Token, TokenKind};
use crate::types::{CaretPosition, ParsedStatement, SegmentOptions, Segmentation, SourcePosition};

mod arguments;
mod caret;
mod checks;

use arguments::ArgumentBuffers;

/// Transaction statements whose text opens or closes a block.
static TRANSACTION_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)BEGIN|END").expect("valid regex"));

/// Splits the script held by `tree` into statements.
///
/// The result always holds at least one statement; the last one is empty
/// when the script ends with a terminator.
///
/// # Errors
///
/// Returns [`SegmentError::InvalidCaret`] when the caret line or column is 0
/// and [`SegmentError::EofTerminator`] when end-of-input is configured as
/// the terminator.
pub fn segment(
    tree: &SyntaxTree,
    caret: CaretPosition,
    options: &SegmentOptions,
) -> Result<Segmentation, SegmentError> {
    if caret.line == 0 || caret.column == 0 {
        return Err(SegmentError::InvalidCaret {
            line: caret.line,
            column: caret.column,
        });
    }
    if options.terminator == TokenKind::Eof {
        return Err(SegmentError::EofTerminator);
    }

    #[cfg(feature = "tracing")]
    let _span = info_span!(
        "segment",
        tokens = tree.tokens().len(),
        caret_line = caret.line,
        caret_column = caret.column
    )
    .entered();

    let mut segmenter = Segmenter::new(caret, options.terminator);
    segmenter.visit(tree.root(), &options.token_separator, None);
    Ok(segmenter.finish())
}

struct Segmenter {
    caret: CaretPosition,
    terminator: TokenKind,
    /// Closed statements, in source order.
    statements: Vec<ParsedStatement>,
    current: ParsedStatement,
    enclosing: Option<usize>,
    /// Just past the last terminator that closed a statement; where a
    /// statement without tokens starts for the caret test.
    resume: SourcePosition,
    /// Transaction open/close statements seen so far; odd while inside a block.
    transaction_marks: usize,
}

impl Segmenter {
    fn new(caret: CaretPosition, terminator: TokenKind) -> Self {
        Self {
            caret,
            terminator,
            statements: Vec::new(),
            current: ParsedStatement::default(),
            enclosing: None,
            resume: SourcePosition {
                offset: 0,
                line: 1,
                column: 1,
            },
            transaction_marks: 0,
        }
    }

    fn finish(mut self) -> Segmentation {
        self.statements.push(self.current);
        Segmentation {
            statements: self.statements,
            enclosing_index: self.enclosing,
        }
    }

    fn visit(&mut self, node: Node<'_>, separator: &str, mut args: Option<&mut ArgumentBuffers>) {
        if node.is(NodeKind::Stmt) && !node.ancestors().any(|parent| parent.is(NodeKind::Stmt)) {
            self.current.node.get_or_insert(node.id());
            self.current.nodes.push(node.id());
        }
        checks::check_node(node, &mut self.current);

        for child in node.children() {
            match child {
                Child::Token(token) => self.visit_token(node, token, separator, args.as_deref_mut()),
                Child::Node(child) => self.visit_child(child, separator, args.as_deref_mut()),
            }
        }
    }

    fn visit_token(
        &mut self,
        parent: Node<'_>,
        token: &Token,
        separator: &str,
        args: Option<&mut ArgumentBuffers>,
    ) {
        let closes = token.kind == self.terminator || token.kind == TokenKind::Eof;
        if closes && self.transaction_marks % 2 == 0 {
            self.check_caret(token);
            if token.kind != TokenKind::Eof {
                self.close_statement(token);
            }
            return;
        }
        if token.kind == TokenKind::Eof {
            return;
        }

        self.current.cover(token);
        match args {
            None => {
                self.current.text.push_str(&token.text);
                self.current.text.push_str(separator);
            }
            Some(args) => {
                if !(parent.is(NodeKind::CallSyntax) && token.kind.is_call_delimiter()) {
                    args.push_str(&token.text);
                    args.push_str(separator);
                }
            }
        }
    }

    fn visit_child(
        &mut self,
        child: Node<'_>,
        separator: &str,
        mut args: Option<&mut ArgumentBuffers>,
    ) {
        if child.is(NodeKind::TransactionStmt) && TRANSACTION_KEYWORD.is_match(&child.text()) {
            self.transaction_marks += 1;
        }

        match child.kind() {
            NodeKind::EmptyGroupingSet => {}
            NodeKind::IndirectionEl => {
                self.visit(child, "", args.as_deref_mut());
                self.append(separator, args);
            }
            NodeKind::SugarCall => {
                let mut call_args = ArgumentBuffers::new();
                self.visit(child, separator, Some(&mut call_args));
                let call = call_args.into_call(separator);
                #[cfg(feature = "tracing")]
                debug!(call = %call, "rewrote sugar call");
                self.append(&call, args.as_deref_mut());
                self.append(separator, args);
            }
            kind => {
                self.visit(child, separator, args.as_deref_mut());
                if let Some(args) = args {
                    if matches!(kind, NodeKind::Colid | NodeKind::StmtBlock) {
                        args.close_current(separator);
                    }
                }
            }
        }
    }

    /// Appends to the innermost argument buffer, or to the statement text.
    fn append(&mut self, text: &str, args: Option<&mut ArgumentBuffers>) {
        match args {
            Some(args) => args.push_str(text),
            None => self.current.text.push_str(text),
        }
    }

    fn check_caret(&mut self, terminator: &Token) {
        if self.enclosing.is_some() {
            return;
        }
        let start = self.current.start.unwrap_or(self.resume);
        if caret::encloses(self.caret, start, terminator) {
            let index = self.statements.len();
            #[cfg(feature = "tracing")]
            debug!(index, "caret enclosed by statement");
            self.enclosing = Some(index);
        }
    }

    fn close_statement(&mut self, terminator: &Token) {
        let (line, column) = terminator.end_line_column();
        self.resume = SourcePosition {
            offset: terminator.span.end,
            line,
            column,
        };
        let statement = std::mem::take(&mut self.current);
        #[cfg(feature = "tracing")]
        debug!(
            index = self.statements.len(),
            warnings = statement.warnings.len(),
            "statement closed"
        );
        self.statements.push(statement);
    }
}
