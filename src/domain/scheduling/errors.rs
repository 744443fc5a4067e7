//! Error types for schedule creation.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Which input collection was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCollection {
    Users,
    Chores,
}

impl InputCollection {
    pub fn field(&self) -> &'static str {
        match self {
            InputCollection::Users => "users",
            InputCollection::Chores => "chores",
        }
    }
}

impl fmt::Display for InputCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Structural input errors. Any of these aborts the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Invalid user at index {index}: '{field}' {reason}")]
    InvalidUser {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Invalid chore at index {index}: '{field}' {reason}")]
    InvalidChore {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Cannot create schedule with no {0}")]
    EmptyInput(InputCollection),
}

impl ScheduleError {
    pub fn invalid_user(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        ScheduleError::InvalidUser {
            index,
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_chore(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        ScheduleError::InvalidChore {
            index,
            field,
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScheduleError::InvalidUser { .. } => ErrorCode::InvalidUser,
            ScheduleError::InvalidChore { .. } => ErrorCode::InvalidChore,
            ScheduleError::EmptyInput(_) => ErrorCode::EmptyInput,
        }
    }

    /// Dotted path of the offending field, e.g. `users[1].max_chores`.
    pub fn field_path(&self) -> String {
        match self {
            ScheduleError::InvalidUser { index, field, .. } => format!("users[{}].{}", index, field),
            ScheduleError::InvalidChore { index, field, .. } => {
                format!("chores[{}].{}", index, field)
            }
            ScheduleError::EmptyInput(collection) => collection.field().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_malformed_field() {
        let err = ScheduleError::invalid_user(1, "max_chores", "must be a non-negative whole number");
        assert_eq!(
            err.to_string(),
            "Invalid user at index 1: 'max_chores' must be a non-negative whole number"
        );
        assert_eq!(err.field_path(), "users[1].max_chores");
    }

    #[test]
    fn empty_input_message() {
        let err = ScheduleError::EmptyInput(InputCollection::Chores);
        assert_eq!(err.to_string(), "Cannot create schedule with no chores");
        assert_eq!(err.field_path(), "chores");
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(ScheduleError::invalid_user(0, "name", "x").code(), ErrorCode::InvalidUser);
        assert_eq!(ScheduleError::invalid_chore(0, "name", "x").code(), ErrorCode::InvalidChore);
        assert_eq!(
            ScheduleError::EmptyInput(InputCollection::Users).code(),
            ErrorCode::EmptyInput
        );
    }
}
