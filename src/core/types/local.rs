//! `PasetoV4Local` - symmetric `v4.local` tokens.
//!
//! This module provides the `PasetoV4Local` key holder, which encrypts and
//! decrypts `v4.local` tokens.
//!
//! Format: `v4.local.{base64url(n || c || t)}[.{base64url(footer)}]`

use core::fmt::{self, Debug};

use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::header;
use crate::core::operations::local::{self, LocalParts, KEY_SIZE};
use crate::core::operations::random::random_bytes;
use crate::core::purpose::{Local, TokenPurpose};
use crate::core::types::Footer;

/// A 32-byte symmetric key for `v4.local` tokens.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use paseto_v4::PasetoV4Local;
///
/// let key = PasetoV4Local::generate()?;
/// let token = key.encrypt(b"hello", "kid-1", b"")?;
/// assert!(token.starts_with("v4.local."));
///
/// let message = key.decrypt(&token, b"")?;
/// assert_eq!(message, b"hello");
/// # Ok::<(), paseto_v4::PasetoError>(())
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct PasetoV4Local {
    key: [u8; KEY_SIZE],
}

impl PasetoV4Local {
    /// The token header.
    pub const HEADER: &'static str = Local::HEADER;

    /// Creates a key holder from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::InvalidKeySize` unless `key` is exactly 32 bytes.
    pub fn new(key: &[u8]) -> PasetoResult<Self> {
        let key: [u8; KEY_SIZE] = key.try_into().map_err(|_| PasetoError::InvalidKeySize)?;
        Ok(Self { key })
    }

    /// Generates a fresh random key.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::RandomSource` if the OS random source fails.
    pub fn generate() -> PasetoResult<Self> {
        Ok(Self {
            key: random_bytes::<KEY_SIZE>()?,
        })
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// Encrypts `message` into a `v4.local` token.
    ///
    /// The footer is authenticated but left readable; an empty footer is
    /// omitted from the token. `implicit` is authenticated and never
    /// transmitted.
    ///
    /// # Errors
    ///
    /// - `RandomSource` if no nonce can be drawn
    /// - `CounterOverflow` for messages beyond the 32-bit block counter
    pub fn encrypt<'f>(
        &self,
        message: &[u8],
        footer: impl Into<Footer<'f>>,
        implicit: &[u8],
    ) -> PasetoResult<String> {
        local::encrypt(&self.key, message, footer.into().as_bytes(), implicit)
    }

    /// Verifies and decrypts a `v4.local` token.
    ///
    /// # Errors
    ///
    /// - `InvalidTokenFormat` for a wrong header or piece count
    /// - `InvalidPayloadLength` if the payload is shorter than 64 bytes
    /// - `InvalidTag` if authentication fails
    pub fn decrypt(&self, token: &str, implicit: &[u8]) -> PasetoResult<Vec<u8>> {
        local::decrypt(&self.key, token, implicit)
    }

    /// Decrypts a token whose message is UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`Self::decrypt`], plus `InvalidUtf8`.
    pub fn decrypt_str(&self, token: &str, implicit: &[u8]) -> PasetoResult<String> {
        String::from_utf8(self.decrypt(token, implicit)?).map_err(|_| PasetoError::InvalidUtf8)
    }

    /// Serializes `claims` as JSON and encrypts them.
    ///
    /// # Errors
    ///
    /// As [`Self::encrypt`], plus `Json`.
    pub fn encode<'f, T: Serialize + ?Sized>(
        &self,
        claims: &T,
        footer: impl Into<Footer<'f>>,
        implicit: &[u8],
    ) -> PasetoResult<String> {
        let message = serde_json::to_vec(claims)?;
        self.encrypt(&message, footer, implicit)
    }

    /// Decrypts a token and parses its JSON claims.
    ///
    /// # Errors
    ///
    /// As [`Self::decrypt_str`], plus `Json`.
    pub fn decode<T: DeserializeOwned>(&self, token: &str, implicit: &[u8]) -> PasetoResult<T> {
        let message = self.decrypt_str(token, implicit)?;
        Ok(serde_json::from_str(&message)?)
    }

    /// Splits a token into its nonce, ciphertext, tag and footer without
    /// verifying it.
    ///
    /// # Errors
    ///
    /// `InvalidTokenFormat`, `InvalidPayloadLength` or `Base64Decode`.
    pub fn decompose(token: &str) -> PasetoResult<LocalParts> {
        local::decompose(token)
    }

    /// Returns the footer of a token without verifying it.
    ///
    /// # Errors
    ///
    /// `MissingFooter` if the token has none.
    pub fn get_footer(token: &str) -> PasetoResult<Vec<u8>> {
        header::get_footer(token)
    }

    /// Returns the footer of a token parsed as JSON, without verifying it.
    ///
    /// # Errors
    ///
    /// `MissingFooter` if the token has none, `Json` if it does not parse.
    pub fn get_footer_json<T: DeserializeOwned>(token: &str) -> PasetoResult<T> {
        header::get_footer_json(token)
    }

    /// Checks in constant time whether the token's footer equals `expected`.
    ///
    /// # Errors
    ///
    /// `MissingFooter` if the token has none.
    pub fn assert_footer<'f>(token: &str, expected: impl Into<Footer<'f>>) -> PasetoResult<bool> {
        header::assert_footer(token, expected.into().as_bytes())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<[u8; KEY_SIZE]> for PasetoV4Local {
    fn from(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }
}

impl TryFrom<&[u8]> for PasetoV4Local {
    type Error = PasetoError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl AsRef<[u8]> for PasetoV4Local {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PasetoV4Local {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasetoV4Local")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for PasetoV4Local {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for PasetoV4Local {}
