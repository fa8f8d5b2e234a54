//! `v4.local` encrypt-then-MAC construction.
//!
//! Key splitting:
//! - `Ek || n2 = BLAKE2b-56(key, "paseto-encryption-key" || n)`
//! - `Ak = BLAKE2b-32(key, "paseto-auth-key-for-aead" || n)`
//!
//! The tag covers `PAE(header, n, c, footer, implicit)` and is checked in
//! constant time before any keystream is applied on decryption.

use tracing::debug;
use zeroize::Zeroizing;

use super::hash::{mac32, mac56};
use super::pae::pae;
use super::random::random_bytes;
use super::xchacha;
use crate::core::encoding::{b64u_decode, constant_time_eq};
use crate::core::error::{PasetoError, PasetoResult};
use crate::core::header::{join_token, split_token};
use crate::core::purpose::{Local, TokenPurpose};

/// Size of the random nonce `n`.
pub const NONCE_SIZE: usize = 32;

/// Size of the authentication tag `t`.
pub const TAG_SIZE: usize = 32;

/// Symmetric key size.
pub const KEY_SIZE: usize = 32;

const ENCRYPTION_KEY_DOMAIN: &[u8] = b"paseto-encryption-key";
const AUTH_KEY_DOMAIN: &[u8] = b"paseto-auth-key-for-aead";

/// The decoded pieces of a `v4.local` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalParts {
    /// Random nonce `n`.
    pub nonce: [u8; NONCE_SIZE],
    /// Ciphertext `c`, the same length as the message.
    pub ciphertext: Vec<u8>,
    /// Authentication tag `t`.
    pub tag: [u8; TAG_SIZE],
    /// Decoded footer (empty when absent).
    pub footer: Vec<u8>,
}

type EncryptionKeys = (Zeroizing<[u8; 32]>, [u8; xchacha::NONCE_SIZE]);

fn encryption_keys(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> PasetoResult<EncryptionKeys> {
    let tmp = Zeroizing::new(mac56(key, &[ENCRYPTION_KEY_DOMAIN, nonce])?);
    let mut ek = Zeroizing::new([0u8; 32]);
    ek.copy_from_slice(&tmp[..32]);
    let mut n2 = [0u8; xchacha::NONCE_SIZE];
    n2.copy_from_slice(&tmp[32..]);
    Ok((ek, n2))
}

fn auth_key(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> PasetoResult<Zeroizing<[u8; 32]>> {
    Ok(Zeroizing::new(mac32(key, &[AUTH_KEY_DOMAIN, nonce])?))
}

fn compute_tag(
    ak: &[u8; 32],
    nonce: &[u8],
    ciphertext: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<[u8; TAG_SIZE]> {
    let pre_auth = pae(&[Local::HEADER.as_bytes(), nonce, ciphertext, footer, implicit]);
    mac32(ak, &[&pre_auth])
}

/// Encrypts `message` under a fresh random nonce.
pub(crate) fn encrypt(
    key: &[u8; KEY_SIZE],
    message: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<String> {
    let nonce = random_bytes::<NONCE_SIZE>()?;
    encrypt_with_nonce(key, &nonce, message, footer, implicit)
}

/// Encrypts `message` under a caller-supplied nonce.
///
/// Only used to reproduce known-answer vectors.
pub(crate) fn encrypt_with_nonce(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    message: &[u8],
    footer: &[u8],
    implicit: &[u8],
) -> PasetoResult<String> {
    let (ek, n2) = encryption_keys(key, nonce)?;
    let ak = auth_key(key, nonce)?;

    let ciphertext = xchacha::ietf_stream_xor_ic(message, &n2, ek.as_slice(), 0)?;
    let tag = compute_tag(&ak, nonce, &ciphertext, footer, implicit)?;

    let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len() + TAG_SIZE);
    payload.extend_from_slice(nonce);
    payload.extend_from_slice(&ciphertext);
    payload.extend_from_slice(&tag);

    debug!(
        purpose = %Local,
        payload_len = payload.len(),
        has_footer = !footer.is_empty(),
        "token encrypted"
    );
    Ok(join_token::<Local>(&payload, footer))
}

/// Splits a `v4.local` token into nonce, ciphertext, tag and footer.
pub(crate) fn decompose(token: &str) -> PasetoResult<LocalParts> {
    let pieces = split_token::<Local>(token)?;
    let payload = b64u_decode(pieces.payload)?;
    if payload.len() < NONCE_SIZE + TAG_SIZE {
        return Err(PasetoError::InvalidPayloadLength);
    }
    let footer = pieces.footer.map(b64u_decode).transpose()?.unwrap_or_default();

    let (nonce, rest) = payload.split_at(NONCE_SIZE);
    let (ciphertext, tag) = rest.split_at(rest.len() - TAG_SIZE);

    let mut parts = LocalParts {
        nonce: [0u8; NONCE_SIZE],
        ciphertext: ciphertext.to_vec(),
        tag: [0u8; TAG_SIZE],
        footer,
    };
    parts.nonce.copy_from_slice(nonce);
    parts.tag.copy_from_slice(tag);
    Ok(parts)
}

/// Verifies and decrypts a `v4.local` token.
pub(crate) fn decrypt(key: &[u8; KEY_SIZE], token: &str, implicit: &[u8]) -> PasetoResult<Vec<u8>> {
    let parts = decompose(token)?;

    let ak = auth_key(key, &parts.nonce)?;
    let expected = compute_tag(&ak, &parts.nonce, &parts.ciphertext, &parts.footer, implicit)?;
    if !constant_time_eq(&parts.tag, &expected) {
        debug!(purpose = %Local, "tag mismatch");
        return Err(PasetoError::InvalidTag);
    }

    let (ek, n2) = encryption_keys(key, &parts.nonce)?;
    let message = xchacha::ietf_stream_xor_ic(&parts.ciphertext, &n2, ek.as_slice(), 0)?;
    debug!(purpose = %Local, message_len = message.len(), "token decrypted");
    Ok(message)
}
