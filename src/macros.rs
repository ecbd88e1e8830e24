//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance spanning a byte range of the lexer's source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
/// * `$file` - The `Rc<String>` source name
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 0, 2, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr, $file:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: Span {
                start: Position($start as u32, Rc::clone(&$file)),
                end: Position($end as u32, Rc::clone(&$file)),
            },
        }
    };
}
