//! `PaserkK4Seal` - symmetric keys sealed to an X25519 public key.
//!
//! Format: `k4.seal.{base64url(tag || ephemeral_pk || edk)}`
//!
//! Ed25519 keys can be used directly: the public key is mapped to its
//! Montgomery form and the secret key to the clamped scalar derived from
//! its seed.

use core::fmt::{self, Debug};

use ed25519_dalek::{SigningKey, VerifyingKey};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::operations::public::{PUBLIC_KEY_SIZE, SECRET_KEY_SIZE};
use crate::core::operations::random::random_bytes;
use crate::core::operations::seal::{self, SealParts};
use crate::core::purpose::{Seal, TokenPurpose};
use crate::core::types::{PasetoV4Local, PasetoV4Public};

/// X25519 key size.
pub const X25519_KEY_SIZE: usize = 32;

/// An X25519 recipient for `k4.seal`.
///
/// # Example
///
/// ```rust
/// use paseto_v4::{PaserkK4Seal, PasetoV4Local};
///
/// let recipient = PaserkK4Seal::generate()?;
/// let local_key = PasetoV4Local::generate()?;
///
/// let sealed = recipient.wrap(&local_key)?;
/// assert!(sealed.starts_with("k4.seal."));
///
/// let unsealed = recipient.unwrap(&sealed)?;
/// assert_eq!(unsealed, local_key);
/// # Ok::<(), paseto_v4::PasetoError>(())
/// ```
#[derive(Clone)]
pub enum PaserkK4Seal {
    /// Can seal, cannot unseal.
    PublicOnly {
        /// Recipient X25519 public key.
        xpk: [u8; X25519_KEY_SIZE],
    },
    /// Can seal and unseal.
    KeyPair {
        /// Recipient X25519 public key.
        xpk: [u8; X25519_KEY_SIZE],
        /// Recipient X25519 secret key.
        xsk: StaticSecret,
    },
}

impl PaserkK4Seal {
    /// The PASERK header.
    pub const HEADER: &'static str = Seal::HEADER;

    /// Creates a recipient from raw X25519 keys.
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` unless both keys are 32 bytes
    /// - `InvalidKey` if the secret key does not belong to `xpk`
    pub fn new(xpk: &[u8], xsk: Option<&[u8]>) -> PasetoResult<Self> {
        let xpk: [u8; X25519_KEY_SIZE] = xpk.try_into().map_err(|_| PasetoError::InvalidKeySize)?;
        match xsk {
            None => Ok(Self::PublicOnly { xpk }),
            Some(xsk) => {
                let xsk: Zeroizing<[u8; X25519_KEY_SIZE]> =
                    Zeroizing::new(xsk.try_into().map_err(|_| PasetoError::InvalidKeySize)?);
                Self::from_secret(xpk, StaticSecret::from(*xsk))
            }
        }
    }

    fn from_secret(xpk: [u8; X25519_KEY_SIZE], xsk: StaticSecret) -> PasetoResult<Self> {
        if PublicKey::from(&xsk).to_bytes() != xpk {
            return Err(PasetoError::InvalidKey);
        }
        Ok(Self::KeyPair { xpk, xsk })
    }

    /// Creates a recipient from an Ed25519 public key and optional 64-byte
    /// secret key (`seed || public key`).
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` for wrong lengths
    /// - `InvalidKey` if the public key is not a valid point or the secret
    ///   key does not belong to it
    pub fn from_edwards_keys(pk: &[u8], sk: Option<&[u8]>) -> PasetoResult<Self> {
        let pk: [u8; PUBLIC_KEY_SIZE] = pk.try_into().map_err(|_| PasetoError::InvalidKeySize)?;
        let verifying_key = VerifyingKey::from_bytes(&pk).map_err(|_| PasetoError::InvalidKey)?;
        let xpk = verifying_key.to_montgomery().to_bytes();

        let Some(sk) = sk else {
            return Ok(Self::PublicOnly { xpk });
        };
        let sk: Zeroizing<[u8; SECRET_KEY_SIZE]> =
            Zeroizing::new(sk.try_into().map_err(|_| PasetoError::InvalidKeySize)?);
        let signing_key = SigningKey::from_keypair_bytes(&sk).map_err(|_| PasetoError::InvalidKey)?;
        if signing_key.verifying_key() != verifying_key {
            return Err(PasetoError::InvalidKey);
        }
        Self::from_secret(xpk, StaticSecret::from(signing_key.to_scalar_bytes()))
    }

    /// Creates a recipient from a `v4.public` key holder.
    ///
    /// A verify-only holder yields a seal-only recipient.
    #[must_use]
    pub fn from_v4_public(keys: &PasetoV4Public) -> Self {
        match keys {
            PasetoV4Public::PublicOnly(verifying_key) => Self::PublicOnly {
                xpk: verifying_key.to_montgomery().to_bytes(),
            },
            PasetoV4Public::KeyPair(signing_key) => Self::KeyPair {
                xpk: signing_key.verifying_key().to_montgomery().to_bytes(),
                xsk: StaticSecret::from(signing_key.to_scalar_bytes()),
            },
        }
    }

    /// Generates a fresh X25519 keypair.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::RandomSource` if the OS random source fails.
    pub fn generate() -> PasetoResult<Self> {
        let xsk = StaticSecret::from(*Zeroizing::new(random_bytes::<X25519_KEY_SIZE>()?));
        let xpk = PublicKey::from(&xsk).to_bytes();
        Ok(Self::KeyPair { xpk, xsk })
    }

    /// Returns the recipient's X25519 public key.
    #[must_use]
    pub fn public_key(&self) -> &[u8; X25519_KEY_SIZE] {
        match self {
            Self::PublicOnly { xpk } | Self::KeyPair { xpk, .. } => xpk,
        }
    }

    /// Seals `key` to this recipient.
    ///
    /// # Errors
    ///
    /// - `RandomSource` if no ephemeral key can be drawn
    /// - `InvalidKey` if the recipient key is a low-order point
    pub fn wrap(&self, key: &PasetoV4Local) -> PasetoResult<String> {
        seal::wrap(self.public_key(), key.key())
    }

    /// Unseals a `k4.seal` string.
    ///
    /// # Errors
    ///
    /// - `MissingSecretKey` for a seal-only recipient
    /// - `InvalidTokenFormat` for a wrong header or extra pieces
    /// - `InvalidPayloadLength` unless the payload is exactly 96 bytes
    /// - `InvalidAuthTag` if authentication fails
    pub fn unwrap(&self, paserk: &str) -> PasetoResult<PasetoV4Local> {
        match self {
            Self::PublicOnly { .. } => Err(PasetoError::MissingSecretKey),
            Self::KeyPair { xpk, xsk } => {
                let key = seal::unwrap(xpk, xsk, paserk)?;
                Ok(PasetoV4Local::from(*key))
            }
        }
    }

    /// Splits a `k4.seal` string into tag, ephemeral public key and
    /// encrypted key without verifying it.
    ///
    /// # Errors
    ///
    /// `InvalidTokenFormat`, `InvalidPayloadLength` or `Base64Decode`.
    pub fn decompose(paserk: &str) -> PasetoResult<SealParts> {
        seal::decompose(paserk)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PaserkK4Seal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicOnly { xpk } => f.debug_struct("PaserkK4Seal").field("xpk", xpk).finish(),
            Self::KeyPair { xpk, .. } => f
                .debug_struct("PaserkK4Seal")
                .field("xpk", xpk)
                .field("xsk", &"[REDACTED]")
                .finish(),
        }
    }
}
