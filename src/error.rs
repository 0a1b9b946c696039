//! Error types for the cipher engine.
//!
//! Every failure here is local to a single call and recoverable by the
//! caller. The engine never touches the filesystem, so there is no I/O
//! variant; those errors live in the binary's `anyhow` layer.

use thiserror::Error;

use crate::model::Scheme;

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, CipherError>;

/// The error type for all cipher operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The requested direction is neither `encrypt` nor `decrypt`.
    #[error("invalid mode '{0}': expected 'encrypt' or 'decrypt'")]
    InvalidMode(String),

    /// The scheme needs a key and none was supplied.
    #[error("the {0} cipher requires a key")]
    MissingKey(Scheme),

    /// A key was supplied but cannot be used with the scheme.
    #[error("invalid key for the {scheme} cipher: {reason}")]
    InvalidKey { scheme: Scheme, reason: String },

    /// The scheme works from a fixed table and refuses a caller key.
    #[error("the {0} cipher does not accept a key")]
    UnexpectedKey(Scheme),

    /// Decryption met a character that has no table entry.
    #[error("cannot decode '{character}' at position {position}")]
    DecodeFailure { character: char, position: usize },
}

impl CipherError {
    pub(crate) fn invalid_key(scheme: Scheme, reason: impl Into<String>) -> Self {
        CipherError::InvalidKey {
            scheme,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_mode() {
        let err = CipherError::InvalidMode("rot13".to_string());
        assert_eq!(
            err.to_string(),
            "invalid mode 'rot13': expected 'encrypt' or 'decrypt'"
        );
    }

    #[test]
    fn display_missing_key() {
        let err = CipherError::MissingKey(Scheme::RailFence);
        assert_eq!(err.to_string(), "the rail fence cipher requires a key");
    }

    #[test]
    fn display_invalid_key() {
        let err = CipherError::invalid_key(Scheme::Transposition, "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid key for the transposition cipher: must be at least 1"
        );
    }

    #[test]
    fn display_decode_failure() {
        let err = CipherError::DecodeFailure {
            character: '!',
            position: 3,
        };
        assert_eq!(err.to_string(), "cannot decode '!' at position 3");
    }
}
