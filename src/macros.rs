//! Utility macros for the interpreter front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_CHAR_TOKEN!` - Creates a one-character token at the lexer cursor
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$position` - The line/column the token starts at
/// * `$span` - The byte range of the token in the input
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), position, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
            span: $span,
        }
    };
}

/// Creates a token of `$kind` whose literal is the character under the
/// lexer cursor. The cursor is not moved.
#[macro_export]
macro_rules! MK_CHAR_TOKEN {
    ($lexer:expr, $kind:expr) => {
        MK_TOKEN!(
            $kind,
            String::from($lexer.ch as char),
            $lexer.cursor_position(),
            Span {
                start: $lexer.pos,
                end: $lexer.pos + 1
            }
        )
    };
}
