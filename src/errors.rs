// Assessment error taxonomy
//
// Every failure in generation and scoring is local and synchronous. Nothing
// here is retried; callers restart the assessment from scratch.

use thiserror::Error;

/// Errors raised by the question generator, scoring engine and session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssessmentError {
    /// The phrase pool cannot yield a single valid pair.
    #[error("Insufficient phrases: requested {requested} question(s), only {available} phrase(s) usable")]
    InsufficientPhrases { requested: usize, available: usize },

    /// A dimension is malformed or references a category that does not exist.
    #[error("Invalid dimension '{dimension}': {reason}")]
    InvalidDimension { dimension: String, reason: String },

    /// A question phrase could not be matched to any configured category.
    #[error("Unknown phrase '{phrase}' in question {question_id}")]
    UnknownPhrase { question_id: String, phrase: String },

    /// A response references a question that is not part of the assessment.
    #[error("Response references unknown question '{0}'")]
    UnknownQuestion(String),

    /// More than one response was submitted for the same question.
    #[error("Duplicate response for question '{0}'")]
    DuplicateResponse(String),

    #[error("Slider value {0} is outside the 0-10 range")]
    InvalidSliderValue(i64),

    /// The phrase configuration document is structurally invalid.
    #[error("Invalid phrase configuration: {0}")]
    InvalidConfig(String),

    #[error("Assessment has not been started")]
    SessionNotStarted,

    #[error("Assessment is already completed; generate a new one to retake it")]
    SessionCompleted,
}

pub type Result<T> = std::result::Result<T, AssessmentError>;

impl AssessmentError {
    pub fn insufficient_phrases(requested: usize, available: usize) -> Self {
        Self::InsufficientPhrases {
            requested,
            available,
        }
    }

    pub fn invalid_dimension(dimension: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            dimension: dimension.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_phrase(question_id: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self::UnknownPhrase {
            question_id: question_id.into(),
            phrase: phrase.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = AssessmentError::invalid_dimension("Uncertainty Attitude", "missing category 'Play'");
        assert_eq!(
            err.to_string(),
            "Invalid dimension 'Uncertainty Attitude': missing category 'Play'"
        );

        let err = AssessmentError::unknown_phrase("q3", "I like maps");
        assert!(err.to_string().contains("q3"));
        assert!(err.to_string().contains("I like maps"));
    }

    #[test]
    fn test_insufficient_phrases_message() {
        let err = AssessmentError::insufficient_phrases(5, 1);
        assert!(err.to_string().contains("requested 5"));
        assert!(err.to_string().contains("only 1"));
    }
}
