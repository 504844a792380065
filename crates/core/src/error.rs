use crate::transcript::TurnId;

use thiserror::Error;

/// Result type alias for turnplay-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the playback engine
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or duplicate-keyed transcript rejected by a load
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Out-of-bounds indexed lookup
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Turn id that does not belong to the loaded transcript
    #[error("unknown turn: {0}")]
    UnknownTurn(#[from] UnknownTurnError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),
}

/// Reasons a transcript is rejected at load time.
///
/// A failed load never replaces the transcript that was loaded before it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two turns share the same id
    #[error("duplicate turn id '{turn_id}' at index {index}")]
    DuplicateTurnId { turn_id: TurnId, index: usize },

    /// A turn id is empty or whitespace
    #[error("turn at index {index} has an empty turn id")]
    EmptyTurnId { index: usize },

    /// The transcript root is not an object
    #[error("transcript must be an object")]
    NotAnObject,

    /// `sessionName` is present but not a string
    #[error("'sessionName' must be a string")]
    InvalidSessionName,

    /// `turns` is missing or is not a sequence
    #[error("'turns' must be an array")]
    TurnsNotSequence,

    /// An element of `turns` is not an object
    #[error("turn at index {index} must be an object")]
    TurnNotAnObject { index: usize },

    /// A required turn field is absent
    #[error("turn at index {index} is missing '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// A field is present with the wrong shape
    #[error("turn at index {index}: '{field}' must be {expected}")]
    InvalidField { index: usize, field: &'static str, expected: &'static str },

    /// Typed decoding failed after structural checks passed
    #[error("could not decode transcript: {0}")]
    Decode(String),
}

/// Indexed lookup outside `[0, len - 1]`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("index {index} out of bounds for transcript of {len} turns")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Reference to a turn id absent from the current transcript
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no turn with id '{turn_id}' in the current transcript")]
pub struct UnknownTurnError {
    pub turn_id: TurnId,
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err: Error = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));
        assert_eq!(io_err.to_string(), "I/O error: file not found");

        let config_err = Error::Config("bad level".to_string());
        assert_eq!(config_err.to_string(), "configuration error: bad level");

        let parse_err = Error::Parse("invalid JSON".to_string());
        assert_eq!(parse_err.to_string(), "parse error: invalid JSON");
    }

    #[test]
    fn test_validation_error_display() {
        let dup = ValidationError::DuplicateTurnId { turn_id: TurnId::from("t1"), index: 2 };
        assert_eq!(dup.to_string(), "duplicate turn id 't1' at index 2");

        let empty = ValidationError::EmptyTurnId { index: 0 };
        assert_eq!(empty.to_string(), "turn at index 0 has an empty turn id");

        assert_eq!(ValidationError::NotAnObject.to_string(), "transcript must be an object");
        assert_eq!(ValidationError::TurnsNotSequence.to_string(), "'turns' must be an array");

        let missing = ValidationError::MissingField { index: 1, field: "agentMessage" };
        assert_eq!(missing.to_string(), "turn at index 1 is missing 'agentMessage'");

        let invalid = ValidationError::InvalidField { index: 3, field: "processingSteps", expected: "an array" };
        assert_eq!(invalid.to_string(), "turn at index 3: 'processingSteps' must be an array");
    }

    #[test]
    fn test_index_and_unknown_turn_display() {
        let err = IndexError { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of bounds for transcript of 3 turns");

        let err = UnknownTurnError { turn_id: TurnId::from("t99") };
        assert_eq!(err.to_string(), "no turn with id 't99' in the current transcript");
    }

    #[test]
    fn test_error_from_variants() {
        let error: Error = ValidationError::TurnsNotSequence.into();
        assert_eq!(error.to_string(), "validation error: 'turns' must be an array");

        let error: Error = IndexError { index: 0, len: 0 }.into();
        assert!(matches!(error, Error::Index(IndexError { index: 0, len: 0 })));

        let error: Error = UnknownTurnError { turn_id: TurnId::from("x") }.into();
        assert!(error.to_string().starts_with("unknown turn:"));
    }

    #[test]
    fn test_result_type_alias() {
        let ok: Result<i32> = Ok(42);
        assert!(ok.is_ok());

        let err: Result<i32> = Err(Error::Parse("error".to_string()));
        assert!(err.is_err());
    }
}
