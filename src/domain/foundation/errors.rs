//! Error codes shared by the domain and its adapters.

use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidUser,
    InvalidChore,
    EmptyInput,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// Returns true for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorCode::InternalError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUser => "INVALID_USER",
            ErrorCode::InvalidChore => "INVALID_CHORE",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}
