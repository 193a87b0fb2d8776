use crate::syntax::Token;
use crate::types::{CaretPosition, SourcePosition};

/// Whether `caret` falls in the statement that starts at `start` and is
/// closed by `terminator`.
pub(super) fn encloses(caret: CaretPosition, start: SourcePosition, terminator: &Token) -> bool {
    let before_terminator = caret.line < terminator.line
        || (caret.line == terminator.line && caret.column <= terminator.column);

    (caret.line > start.line && caret.line < terminator.line)
        || (caret.line == start.line && caret.column >= start.column && before_terminator)
        || (caret.line == terminator.line && caret.column <= terminator.column)
}
