//! Error types for dynaprompt.
//!
//! Uses thiserror for derive macros. Only failures the prompt cursor cannot
//! absorb end up here; exhausted sequences are handled locally and never
//! surface as errors.

use crate::exit_codes;
use crate::sampling::SequenceError;
use thiserror::Error;

/// Main error type for dynaprompt operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// User provided invalid arguments or an invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// A node input was missing, malformed, or outside the declared range.
    #[error("invalid node input: {0}")]
    InvalidInput(String),

    /// The sampling engine failed in a way that is not plain exhaustion.
    #[error("prompt engine failed: {0}")]
    Engine(#[from] SequenceError),

    /// Wildcard directory resolution or listing failed.
    #[error("wildcard directory error: {0}")]
    Wildcards(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::InvalidInput(_) => exit_codes::INPUT_FAILURE,
            PromptError::Engine(_) => exit_codes::ENGINE_FAILURE,
            PromptError::Wildcards(_) => exit_codes::WILDCARD_FAILURE,
        }
    }
}

/// Result type alias for dynaprompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromptError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn invalid_input_has_correct_exit_code() {
        let err = PromptError::InvalidInput("seed must be an integer".to_string());
        assert_eq!(err.exit_code(), exit_codes::INPUT_FAILURE);
    }

    #[test]
    fn engine_error_converts_from_sequence_error() {
        let err: PromptError = SequenceError::Engine("wildcard file unreadable".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::ENGINE_FAILURE);
        assert_eq!(
            err.to_string(),
            "prompt engine failed: wildcard file unreadable"
        );
    }

    #[test]
    fn wildcard_error_has_correct_exit_code() {
        let err = PromptError::Wildcards("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::WILDCARD_FAILURE);
        assert_eq!(
            err.to_string(),
            "wildcard directory error: permission denied"
        );
    }
}
