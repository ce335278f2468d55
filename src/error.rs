//! Engine error types.
//!
//! Every engine call returns `Result<_, EngineError>`. Callers that only
//! care about the category match on [`EngineError::kind`].

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Errors surfaced by the word pool and the round state machine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The word source had no non-blank lines.
    #[display("Word source is empty")]
    EmptySource,

    /// The word source is not valid UTF-8.
    #[display("Word source must be UTF-8 encoded (invalid byte at offset {valid_up_to})")]
    InvalidEncoding {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },

    /// The word file could not be read.
    #[display("Word file {path} is unavailable: {reason}")]
    SourceUnavailable {
        /// Path that was attempted.
        path: String,
        /// OS error text.
        reason: String,
    },

    /// Every word in the pool has been used.
    #[display("All words have been used")]
    PoolExhausted,

    /// An event arrived while no game was running.
    #[display("No game is running, start a new game first")]
    GameNotRunning,

    /// Unexpected fault while processing an event.
    #[display("Internal error: {message}")]
    Internal {
        /// Description of the fault.
        message: String,
    },
}

impl EngineError {
    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::EmptySource => ErrorKind::EmptySource,
            EngineError::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            EngineError::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            EngineError::PoolExhausted => ErrorKind::PoolExhausted,
            EngineError::GameNotRunning => ErrorKind::GameNotRunning,
            EngineError::Internal { .. } => ErrorKind::InternalError,
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        EngineError::Internal {
            message: message.into(),
        }
    }
}

/// Error categories, without payload.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
pub enum ErrorKind {
    EmptySource,
    InvalidEncoding,
    SourceUnavailable,
    PoolExhausted,
    GameNotRunning,
    InternalError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(EngineError::EmptySource.kind(), ErrorKind::EmptySource);
        assert_eq!(
            EngineError::InvalidEncoding { valid_up_to: 3 }.kind(),
            ErrorKind::InvalidEncoding
        );
        assert_eq!(EngineError::PoolExhausted.kind(), ErrorKind::PoolExhausted);
        assert_eq!(EngineError::GameNotRunning.kind(), ErrorKind::GameNotRunning);
        assert_eq!(EngineError::internal("boom").kind(), ErrorKind::InternalError);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::InvalidEncoding { valid_up_to: 4 }.to_string(),
            "Word source must be UTF-8 encoded (invalid byte at offset 4)"
        );
        assert_eq!(
            EngineError::SourceUnavailable {
                path: "words.txt".into(),
                reason: "not found".into(),
            }
            .to_string(),
            "Word file words.txt is unavailable: not found"
        );
        assert_eq!(EngineError::internal("boom").to_string(), "Internal error: boom");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::GameNotRunning.to_string(), "GameNotRunning");
        assert_eq!(ErrorKind::InternalError.as_ref(), "InternalError");
    }
}
