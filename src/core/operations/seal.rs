//! X25519-based `k4.seal` wrapping of a symmetric key.
//!
//! This module implements public key encryption using:
//! - X25519 for key exchange with a fresh ephemeral keypair
//! - unkeyed BLAKE2b for key and nonce derivation
//! - IETF `XChaCha20` for encryption of the 32-byte key
//! - keyed BLAKE2b for the tag over `header || epk || edk`
//!
//! Payload: `tag(32) || epk(32) || edk(32)`.

use subtle::ConstantTimeEq;
use tracing::debug;
use x25519_dalek::{PublicKey, SharedSecret, StaticSecret};
use zeroize::Zeroizing;

use super::hash::{hash24, hash32, mac32};
use super::random::random_bytes;
use super::xchacha;
use crate::core::encoding::b64u_decode;
use crate::core::error::{PasetoError, PasetoResult};
use crate::core::header::{join_token, split_token};
use crate::core::purpose::{Seal, TokenPurpose};

/// Size of the authentication tag.
pub const SEAL_TAG_SIZE: usize = 32;

/// Size of the ephemeral public key (X25519).
pub const EPHEMERAL_PK_SIZE: usize = 32;

/// Size of the encrypted data key.
pub const EDK_SIZE: usize = 32;

/// Total size of sealed data: tag || ephemeral_pk || edk.
pub const SEAL_DATA_SIZE: usize = SEAL_TAG_SIZE + EPHEMERAL_PK_SIZE + EDK_SIZE;

/// Domain separation byte for the encryption key.
const SEAL_EK_DOMAIN: u8 = 0x01;

/// Domain separation byte for the authentication key.
const SEAL_AK_DOMAIN: u8 = 0x02;

/// The decoded pieces of a `k4.seal` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealParts {
    /// Authentication tag.
    pub tag: [u8; SEAL_TAG_SIZE],
    /// Ephemeral X25519 public key.
    pub epk: [u8; EPHEMERAL_PK_SIZE],
    /// Encrypted data key.
    pub edk: [u8; EDK_SIZE],
}

fn derive(domain: u8, xk: &SharedSecret, epk: &[u8; 32], xpk: &[u8; 32]) -> Zeroizing<[u8; 32]> {
    Zeroizing::new(hash32(&[&[domain], Seal::HEADER.as_bytes(), xk.as_bytes(), epk, xpk]))
}

fn shared_secret(secret: &StaticSecret, public: &[u8; 32]) -> PasetoResult<SharedSecret> {
    let xk = secret.diffie_hellman(&PublicKey::from(*public));
    if !xk.was_contributory() {
        return Err(PasetoError::InvalidKey);
    }
    Ok(xk)
}

fn compute_tag(ak: &[u8; 32], epk: &[u8; 32], edk: &[u8]) -> PasetoResult<[u8; SEAL_TAG_SIZE]> {
    mac32(ak, &[Seal::HEADER.as_bytes(), epk, edk])
}

/// Seals `local_key` to the recipient's X25519 public key.
pub(crate) fn wrap(xpk: &[u8; 32], local_key: &[u8; 32]) -> PasetoResult<String> {
    let esk = Zeroizing::new(random_bytes::<32>()?);
    wrap_with_ephemeral(xpk, local_key, &esk)
}

/// Seals `local_key` using a caller-supplied ephemeral secret.
///
/// Only used to reproduce known-answer vectors.
pub(crate) fn wrap_with_ephemeral(
    xpk: &[u8; 32],
    local_key: &[u8; 32],
    esk: &[u8; 32],
) -> PasetoResult<String> {
    let esk = StaticSecret::from(*esk);
    let epk = PublicKey::from(&esk).to_bytes();
    let xk = shared_secret(&esk, xpk)?;

    let ek = derive(SEAL_EK_DOMAIN, &xk, &epk, xpk);
    let ak = derive(SEAL_AK_DOMAIN, &xk, &epk, xpk);
    let nonce = hash24(&[&epk, xpk]);

    let edk = xchacha::ietf_stream_xor_ic(local_key, &nonce, ek.as_slice(), 0)?;
    let tag = compute_tag(&ak, &epk, &edk)?;

    let mut payload = Vec::with_capacity(SEAL_DATA_SIZE);
    payload.extend_from_slice(&tag);
    payload.extend_from_slice(&epk);
    payload.extend_from_slice(&edk);

    debug!(purpose = %Seal, "key sealed");
    Ok(join_token::<Seal>(&payload, &[]))
}

/// Splits a `k4.seal` string into tag, ephemeral key and encrypted key.
pub(crate) fn decompose(paserk: &str) -> PasetoResult<SealParts> {
    let pieces = split_token::<Seal>(paserk)?;
    let payload = b64u_decode(pieces.payload)?;
    if payload.len() != SEAL_DATA_SIZE {
        return Err(PasetoError::InvalidPayloadLength);
    }

    let mut parts = SealParts {
        tag: [0u8; SEAL_TAG_SIZE],
        epk: [0u8; EPHEMERAL_PK_SIZE],
        edk: [0u8; EDK_SIZE],
    };
    parts.tag.copy_from_slice(&payload[..SEAL_TAG_SIZE]);
    parts.epk.copy_from_slice(&payload[SEAL_TAG_SIZE..SEAL_TAG_SIZE + EPHEMERAL_PK_SIZE]);
    parts.edk.copy_from_slice(&payload[SEAL_TAG_SIZE + EPHEMERAL_PK_SIZE..]);
    Ok(parts)
}

/// Unseals a `k4.seal` string with the recipient's X25519 keypair.
pub(crate) fn unwrap(
    xpk: &[u8; 32],
    xsk: &StaticSecret,
    paserk: &str,
) -> PasetoResult<Zeroizing<[u8; 32]>> {
    let parts = decompose(paserk)?;
    let xk = shared_secret(xsk, &parts.epk)?;

    let ak = derive(SEAL_AK_DOMAIN, &xk, &parts.epk, xpk);
    let expected = compute_tag(&ak, &parts.epk, &parts.edk)?;
    if !bool::from(expected.ct_eq(&parts.tag)) {
        debug!(purpose = %Seal, "auth tag mismatch");
        return Err(PasetoError::InvalidAuthTag);
    }

    let ek = derive(SEAL_EK_DOMAIN, &xk, &parts.epk, xpk);
    let nonce = hash24(&[&parts.epk, xpk]);
    let plaintext = Zeroizing::new(xchacha::ietf_stream_xor_ic(&parts.edk, &nonce, ek.as_slice(), 0)?);

    let mut key = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&plaintext);
    debug!(purpose = %Seal, "key unsealed");
    Ok(key)
}
