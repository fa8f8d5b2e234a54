//! BLAKE2b helpers used for key derivation and tags.
//!
//! Keyed variants go through `Blake2bMac` (the key is mixed in as a padded
//! first block); unkeyed ones through `Blake2b` with the output length in the
//! parameter block. The two are not interchangeable: an empty MAC key still
//! processes a zero block.

use blake2::digest::consts::{U24, U32, U56};
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::{Blake2b, Blake2bMac};

use crate::core::error::{PasetoError, PasetoResult};

type Blake2bMac32 = Blake2bMac<U32>;
type Blake2bMac56 = Blake2bMac<U56>;
type Blake2b32 = Blake2b<U32>;
type Blake2b24 = Blake2b<U24>;

fn absorb<D: Update + FixedOutput>(mut hasher: D, parts: &[&[u8]], out: &mut [u8]) {
    for part in parts {
        hasher.update(part);
    }
    out.copy_from_slice(&hasher.finalize_fixed());
}

/// Keyed BLAKE2b with a 32-byte output over the concatenation of `parts`.
///
/// # Errors
///
/// Returns `InvalidKeySize` if `key` is longer than 64 bytes.
pub fn mac32(key: &[u8], parts: &[&[u8]]) -> PasetoResult<[u8; 32]> {
    let hasher = <Blake2bMac32 as KeyInit>::new_from_slice(key).map_err(|_| PasetoError::InvalidKeySize)?;
    let mut out = [0u8; 32];
    absorb(hasher, parts, &mut out);
    Ok(out)
}

/// Keyed BLAKE2b with a 56-byte output over the concatenation of `parts`.
///
/// # Errors
///
/// Returns `InvalidKeySize` if `key` is longer than 64 bytes.
pub fn mac56(key: &[u8], parts: &[&[u8]]) -> PasetoResult<[u8; 56]> {
    let hasher = <Blake2bMac56 as KeyInit>::new_from_slice(key).map_err(|_| PasetoError::InvalidKeySize)?;
    let mut out = [0u8; 56];
    absorb(hasher, parts, &mut out);
    Ok(out)
}

/// Unkeyed BLAKE2b-256.
#[must_use]
pub fn hash32(parts: &[&[u8]]) -> [u8; 32] {
    let mut out = [0u8; 32];
    absorb(Blake2b32::default(), parts, &mut out);
    out
}

/// Unkeyed BLAKE2b-192.
#[must_use]
pub fn hash24(parts: &[&[u8]]) -> [u8; 24] {
    let mut out = [0u8; 24];
    absorb(Blake2b24::default(), parts, &mut out);
    out
}
