//! Error types for input ingestion and trace generation
//!
//! [`InputError`] is the only error a caller can see. It is raised at the
//! point where raw text becomes a numeric array, or when a generator is
//! asked to run without the data it needs. Generators never hand back a
//! partially built trace: they either return a complete sequence or one of
//! these errors.

use thiserror::Error;

/// Malformed input handed to a parser or generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing to parse
    #[error("please enter a valid array: input is empty")]
    Empty,

    /// A list element that is not an integer
    #[error("please enter a valid array: '{token}' is not a number")]
    NotANumber { token: String },

    /// Fewer elements than the visualizer accepts
    #[error("please enter a valid array: expected at least {min} numbers, got {got}")]
    TooFew { got: usize, min: usize },

    /// Bracketed input that does not decode as a JSON integer array
    #[error("please enter a valid array: {message}")]
    MalformedJson { message: String },

    /// Binary search requested without a target value
    #[error("binary search needs a target value")]
    MissingTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_point_at_the_submission() {
        let err = InputError::NotANumber {
            token: "x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "please enter a valid array: 'x' is not a number"
        );
        assert!(InputError::TooFew { got: 1, min: 2 }
            .to_string()
            .contains("at least 2"));
    }
}
