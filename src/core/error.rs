//! Error types for PASETO v4 and PASERK k4.seal operations.
//!
//! This module provides a unified error type for every operation in the crate.
//! Error messages are intentionally vague for verification failures
//! to avoid leaking information that could aid attacks.

use thiserror::Error;

/// Errors that can occur when producing or consuming tokens.
#[derive(Debug, Error)]
pub enum PasetoError {
    /// A key has the wrong length for its role.
    #[error("Invalid key size")]
    InvalidKeySize,

    /// A nonce has the wrong length for the requested cipher variant.
    #[error("Invalid nonce size")]
    InvalidNonceSize,

    /// The token header or piece count is wrong.
    #[error("Invalid token")]
    InvalidTokenFormat,

    /// The decoded payload has the wrong length for its frame.
    #[error("Invalid payload length")]
    InvalidPayloadLength,

    /// v4.local authentication tag mismatch.
    /// Intentionally vague for security.
    #[error("Invalid tag")]
    InvalidTag,

    /// k4.seal authentication tag mismatch.
    /// Intentionally vague for security.
    #[error("Invalid auth tag")]
    InvalidAuthTag,

    /// Ed25519 signature verification failed.
    /// Intentionally vague for security.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The operation needs a secret key but only a public key is held.
    #[error("No secret key was provided")]
    MissingSecretKey,

    /// The token carries no footer.
    #[error("No footer provided")]
    MissingFooter,

    /// The block counter would run past its width.
    #[error("Block counter overflow")]
    CounterOverflow,

    /// The key has the right size but is not usable (bad point, mismatched pair).
    #[error("Invalid key material")]
    InvalidKey,

    /// The decrypted or verified message is not valid UTF-8.
    #[error("Message is not valid UTF-8")]
    InvalidUtf8,

    /// The operating system random source failed.
    #[error("No secure random number generator available")]
    RandomSource,

    /// Base64url decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Claims or footer (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for token operations.
pub type PasetoResult<T> = Result<T, PasetoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PasetoError::InvalidKeySize;
        assert_eq!(err.to_string(), "Invalid key size");

        let err = PasetoError::InvalidNonceSize;
        assert_eq!(err.to_string(), "Invalid nonce size");

        let err = PasetoError::InvalidTokenFormat;
        assert_eq!(err.to_string(), "Invalid token");

        let err = PasetoError::InvalidTag;
        assert_eq!(err.to_string(), "Invalid tag");

        let err = PasetoError::InvalidAuthTag;
        assert_eq!(err.to_string(), "Invalid auth tag");

        let err = PasetoError::InvalidSignature;
        assert_eq!(err.to_string(), "Invalid signature");

        let err = PasetoError::MissingSecretKey;
        assert_eq!(err.to_string(), "No secret key was provided");

        let err = PasetoError::MissingFooter;
        assert_eq!(err.to_string(), "No footer provided");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = PasetoError::from(json_err);
        assert!(matches!(err, PasetoError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let err = PasetoError::InvalidPayloadLength;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("InvalidPayloadLength"));
    }
}
