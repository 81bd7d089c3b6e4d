use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            position,
            span,
        }
    }

    /// Builds the diagnostic for an illegal token, or `None` for any other
    /// kind of token.
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Illegal {
            return None;
        }

        Some(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            },
            token.position,
            token.span,
        ))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } if token.is_ascii() => ErrorTip::None,
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "`{}` is not ASCII, identifiers may only use letters and `_`",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, col {}",
            self.internal_error,
            self.get_position().line,
            self.get_position().col
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
}
