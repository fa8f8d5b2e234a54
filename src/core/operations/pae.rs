//! Pre-Authentication Encoding.
//!
//! `PAE(pieces) = LE64(count) || for each piece: LE64(len) || piece`.
//! Every MAC and signature input in this crate goes through [`pae`], so the
//! boundaries between header, nonce, ciphertext, footer and implicit
//! assertion cannot be shifted.

use crate::core::encoding::le64;

/// Encodes `pieces` as a single unambiguous byte string.
#[must_use]
pub fn pae(pieces: &[&[u8]]) -> Vec<u8> {
    let len = 8 + pieces.iter().map(|p| 8 + p.len()).sum::<usize>();
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&le64(pieces.len() as u64));
    for piece in pieces {
        out.extend_from_slice(&le64(piece.len() as u64));
        out.extend_from_slice(piece);
    }
    out
}
