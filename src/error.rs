//! Error types for sqlgrade.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Learner mistakes are never errors: they come back as a failing
//! [`Verdict`](crate::validate::Verdict).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for sqlgrade operations.
#[derive(Error, Debug)]
pub enum GradeError {
    /// Invalid arguments, unreadable input, or a misconfigured exercise.
    #[error("{0}")]
    UserError(String),

    /// A submission was graded and did not pass.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl GradeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GradeError::UserError(_) => exit_codes::USER_ERROR,
            GradeError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for sqlgrade operations.
pub type Result<T> = std::result::Result<T, GradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = GradeError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = GradeError::ValidationError("wrong rows".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GradeError::UserError("failed to read table".to_string());
        assert_eq!(err.to_string(), "failed to read table");

        let err = GradeError::ValidationError("digest mismatch".to_string());
        assert_eq!(err.to_string(), "Validation failed: digest mismatch");
    }
}
