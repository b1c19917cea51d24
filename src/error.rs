//! Error types for the pounter crate.

use thiserror::Error;

use crate::core::Side;

/// Main error type for the pounter crate.
///
/// Illegal moves are not errors: they are reported as `Ok(false)` by the
/// orchestrator. Everything here is a caller contract violation or an I/O
/// failure in the console front end.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} was never discovered during graph construction")]
    UnknownPosition { position: String },

    #[error("it is not the {requested}'s turn (current turn: {current})")]
    OutOfTurn { requested: Side, current: Side },

    #[error("counter value {value} is out of range (must be 0-9)")]
    InvalidCounter { value: u8 },

    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::OutOfTurn {
            requested: Side::Ai,
            current: Side::Player,
        };
        assert_eq!(err.to_string(), "it is not the AI's turn (current turn: PLAYER)");

        let err = Error::InvalidCounter { value: 12 };
        assert_eq!(err.to_string(), "counter value 12 is out of range (must be 0-9)");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("failed to IO operation"));
    }
}
