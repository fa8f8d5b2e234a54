//! `v4.public` Ed25519 signatures over PAE.
//!
//! The signed input is `PAE("v4.public.", m, footer, implicit)`; the payload
//! is `m || sig`.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use tracing::debug;

use super::pae::pae;
use crate::core::encoding::b64u_decode;
use crate::core::error::{PasetoError, PasetoResult};
use crate::core::header::{join_token, split_token};
use crate::core::purpose::{Public, TokenPurpose};

/// Ed25519 signature size.
pub const SIGNATURE_SIZE: usize = 64;

/// Ed25519 public key size.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 secret key size (`seed || public key`).
pub const SECRET_KEY_SIZE: usize = 64;

/// The decoded pieces of a `v4.public` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicParts {
    /// Signed message `m`.
    pub message: Vec<u8>,
    /// Detached signature.
    pub signature: [u8; SIGNATURE_SIZE],
    /// Decoded footer (empty when absent).
    pub footer: Vec<u8>,
}

fn pre_auth(message: &[u8], footer: &[u8], implicit: &[u8]) -> Vec<u8> {
    pae(&[Public::HEADER.as_bytes(), message, footer, implicit])
}

/// Signs `message` and frames it as a `v4.public` token.
pub(crate) fn sign(signing_key: &SigningKey, message: &[u8], footer: &[u8], implicit: &[u8]) -> String {
    let signature = signing_key.sign(&pre_auth(message, footer, implicit));

    let mut payload = Vec::with_capacity(message.len() + SIGNATURE_SIZE);
    payload.extend_from_slice(message);
    payload.extend_from_slice(&signature.to_bytes());

    debug!(
        purpose = %Public,
        payload_len = payload.len(),
        has_footer = !footer.is_empty(),
        "token signed"
    );
    join_token::<Public>(&payload, footer)
}

/// Splits a `v4.public` token into message, signature and footer.
pub(crate) fn decompose(token: &str) -> PasetoResult<PublicParts> {
    let pieces = split_token::<Public>(token)?;
    let payload = b64u_decode(pieces.payload)?;
    if payload.len() < SIGNATURE_SIZE {
        return Err(PasetoError::InvalidPayloadLength);
    }
    let footer = pieces.footer.map(b64u_decode).transpose()?.unwrap_or_default();

    let (message, signature) = payload.split_at(payload.len() - SIGNATURE_SIZE);
    let mut parts = PublicParts {
        message: message.to_vec(),
        signature: [0u8; SIGNATURE_SIZE],
        footer,
    };
    parts.signature.copy_from_slice(signature);
    Ok(parts)
}

/// Verifies a `v4.public` token and returns its message.
pub(crate) fn verify(verifying_key: &VerifyingKey, token: &str, implicit: &[u8]) -> PasetoResult<Vec<u8>> {
    let parts = decompose(token)?;
    let signature = Signature::from_bytes(&parts.signature);

    verifying_key
        .verify_strict(&pre_auth(&parts.message, &parts.footer, implicit), &signature)
        .map_err(|_| {
            debug!(purpose = %Public, "signature rejected");
            PasetoError::InvalidSignature
        })?;

    Ok(parts.message)
}
