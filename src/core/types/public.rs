//! `PasetoV4Public` - Ed25519 signed `v4.public` tokens.
//!
//! Format: `v4.public.{base64url(m || sig)}[.{base64url(footer)}]`
//!
//! A holder either carries only the verifying key or the full keypair;
//! signing with a verify-only holder fails with `MissingSecretKey`.

use core::fmt::{self, Debug};

use ed25519_dalek::{SigningKey, VerifyingKey};
use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::{Zeroize, Zeroizing};

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::header;
use crate::core::operations::public::{self, PublicParts, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE};
use crate::core::operations::random::random_bytes;
use crate::core::purpose::{Public, TokenPurpose};
use crate::core::types::Footer;

/// Ed25519 keys for `v4.public` tokens.
///
/// # Example
///
/// ```rust
/// use paseto_v4::PasetoV4Public;
///
/// let signer = PasetoV4Public::generate()?;
/// let token = signer.sign(b"signed message", "", b"")?;
///
/// let verifier = PasetoV4Public::new(&signer.public_key(), None)?;
/// assert_eq!(verifier.verify(&token, b"")?, b"signed message");
/// # Ok::<(), paseto_v4::PasetoError>(())
/// ```
#[derive(Clone)]
pub enum PasetoV4Public {
    /// Verification only.
    PublicOnly(VerifyingKey),
    /// Signing and verification.
    KeyPair(SigningKey),
}

impl PasetoV4Public {
    /// The token header.
    pub const HEADER: &'static str = Public::HEADER;

    /// Creates a holder from a 32-byte public key and an optional 64-byte
    /// secret key (`seed || public key`).
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` for wrong lengths
    /// - `InvalidKey` if the public key is not a valid point or the secret
    ///   key's public half does not match it
    pub fn new(public_key: &[u8], secret_key: Option<&[u8]>) -> PasetoResult<Self> {
        let public_key: [u8; PUBLIC_KEY_SIZE] =
            public_key.try_into().map_err(|_| PasetoError::InvalidKeySize)?;
        let verifying_key = VerifyingKey::from_bytes(&public_key).map_err(|_| PasetoError::InvalidKey)?;

        let Some(secret_key) = secret_key else {
            return Ok(Self::PublicOnly(verifying_key));
        };

        let keypair: Zeroizing<[u8; SECRET_KEY_SIZE]> = Zeroizing::new(
            secret_key.try_into().map_err(|_| PasetoError::InvalidKeySize)?,
        );
        let signing_key = SigningKey::from_keypair_bytes(&keypair).map_err(|_| PasetoError::InvalidKey)?;
        if signing_key.verifying_key() != verifying_key {
            return Err(PasetoError::InvalidKey);
        }
        Ok(Self::KeyPair(signing_key))
    }

    /// Generates a fresh keypair.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::RandomSource` if the OS random source fails.
    pub fn generate() -> PasetoResult<Self> {
        let mut seed = random_bytes::<32>()?;
        let signing_key = SigningKey::from_bytes(&seed);
        seed.zeroize();
        Ok(Self::KeyPair(signing_key))
    }

    /// Returns the verifying key.
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        match self {
            Self::PublicOnly(verifying_key) => *verifying_key,
            Self::KeyPair(signing_key) => signing_key.verifying_key(),
        }
    }

    /// Returns the 32-byte public key.
    #[must_use]
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.verifying_key().to_bytes()
    }

    /// Returns the 64-byte secret key (`seed || public key`), if held.
    #[must_use]
    pub fn secret_key(&self) -> Option<Zeroizing<[u8; SECRET_KEY_SIZE]>> {
        match self {
            Self::PublicOnly(_) => None,
            Self::KeyPair(signing_key) => Some(Zeroizing::new(signing_key.to_keypair_bytes())),
        }
    }

    /// Signs `message` into a `v4.public` token.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::MissingSecretKey` for a verify-only holder.
    pub fn sign<'f>(
        &self,
        message: &[u8],
        footer: impl Into<Footer<'f>>,
        implicit: &[u8],
    ) -> PasetoResult<String> {
        match self {
            Self::PublicOnly(_) => Err(PasetoError::MissingSecretKey),
            Self::KeyPair(signing_key) => Ok(public::sign(
                signing_key,
                message,
                footer.into().as_bytes(),
                implicit,
            )),
        }
    }

    /// Verifies a `v4.public` token and returns its message.
    ///
    /// # Errors
    ///
    /// - `InvalidTokenFormat` for a wrong header or piece count
    /// - `InvalidPayloadLength` if the payload is shorter than 64 bytes
    /// - `InvalidSignature` if verification fails
    pub fn verify(&self, token: &str, implicit: &[u8]) -> PasetoResult<Vec<u8>> {
        public::verify(&self.verifying_key(), token, implicit)
    }

    /// Verifies a token whose message is UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`Self::verify`], plus `InvalidUtf8`.
    pub fn verify_str(&self, token: &str, implicit: &[u8]) -> PasetoResult<String> {
        String::from_utf8(self.verify(token, implicit)?).map_err(|_| PasetoError::InvalidUtf8)
    }

    /// Serializes `claims` as JSON and signs them.
    ///
    /// # Errors
    ///
    /// As [`Self::sign`], plus `Json`.
    pub fn encode<'f, T: Serialize + ?Sized>(
        &self,
        claims: &T,
        footer: impl Into<Footer<'f>>,
        implicit: &[u8],
    ) -> PasetoResult<String> {
        let message = serde_json::to_vec(claims)?;
        self.sign(&message, footer, implicit)
    }

    /// Verifies a token and parses its JSON claims.
    ///
    /// # Errors
    ///
    /// As [`Self::verify_str`], plus `Json`.
    pub fn decode<T: DeserializeOwned>(&self, token: &str, implicit: &[u8]) -> PasetoResult<T> {
        let message = self.verify_str(token, implicit)?;
        Ok(serde_json::from_str(&message)?)
    }

    /// Splits a token into message, signature and footer without verifying it.
    ///
    /// # Errors
    ///
    /// `InvalidTokenFormat`, `InvalidPayloadLength` or `Base64Decode`.
    pub fn decompose(token: &str) -> PasetoResult<PublicParts> {
        public::decompose(token)
    }

    /// Returns the footer of a token without verifying it.
    ///
    /// # Errors
    ///
    /// `MissingFooter` if the token has none.
    pub fn get_footer(token: &str) -> PasetoResult<Vec<u8>> {
        header::get_footer(token)
    }

    /// Returns the footer parsed as JSON, without verifying it.
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

impl From<SigningKey> for PasetoV4Public {
    fn from(signing_key: SigningKey) -> Self {
        Self::KeyPair(signing_key)
    }
}

impl From<VerifyingKey> for PasetoV4Public {
    fn from(verifying_key: VerifyingKey) -> Self {
        Self::PublicOnly(verifying_key)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PasetoV4Public {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("PasetoV4Public");
        s.field("public_key", &self.verifying_key());
        if let Self::KeyPair(_) = self {
            s.field("secret_key", &"[REDACTED]");
        }
        s.finish()
    }
}
