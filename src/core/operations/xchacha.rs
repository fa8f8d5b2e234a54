//! XChaCha20: ChaCha20 extended to a 24-byte nonce.
//!
//! The first 16 nonce bytes and the key derive a subkey through HChaCha20;
//! the last 8 bytes become the inner nonce. The IETF variant (inner nonce
//! `0x00000000 || nonce[16..24]`, 32-bit counter) is the one PASETO v4 and
//! PASERK k4 use.

use zeroize::Zeroize;

use super::chacha::{self, key_words};
use crate::core::encoding::{le32, words_le};
use crate::core::error::{PasetoError, PasetoResult};

/// XChaCha20 nonce size in bytes.
pub const NONCE_SIZE: usize = 24;

/// HChaCha20 input nonce size in bytes.
pub const HCHACHA_NONCE_SIZE: usize = 16;

/// Derives a 32-byte subkey from a 16-byte nonce and a 32-byte key.
///
/// Unlike the block function there is no feed-forward: the output is words
/// 0..4 and 12..16 of the permuted state.
///
/// # Errors
///
/// - `InvalidNonceSize` if `nonce` is not 16 bytes
/// - `InvalidKeySize` if `key` is not 32 bytes
pub fn hchacha20(nonce: &[u8], key: &[u8]) -> PasetoResult<[u8; 32]> {
    if nonce.len() != HCHACHA_NONCE_SIZE {
        return Err(PasetoError::InvalidNonceSize);
    }
    let key = key_words(key)?;
    let mut state = chacha::initial_state(&key, words_le(nonce));
    chacha::permute(&mut state);

    let mut out = [0u8; 32];
    for (bytes, word) in out
        .chunks_exact_mut(4)
        .zip(state[..4].iter().chain(state[12..].iter()))
    {
        bytes.copy_from_slice(&le32(*word));
    }
    state.zeroize();
    Ok(out)
}

fn split_nonce(nonce: &[u8]) -> PasetoResult<(&[u8], &[u8])> {
    if nonce.len() != NONCE_SIZE {
        return Err(PasetoError::InvalidNonceSize);
    }
    Ok(nonce.split_at(HCHACHA_NONCE_SIZE))
}

/// XChaCha20 over the classic engine (8-byte inner nonce, 64-bit counter).
///
/// # Errors
///
/// - `InvalidNonceSize` if `nonce` is not 24 bytes
/// - `InvalidKeySize` if `key` is not 32 bytes
/// - `CounterOverflow` if the last block index would exceed `u64::MAX`
pub fn stream_xor_ic(message: &[u8], nonce: &[u8], key: &[u8], counter: u64) -> PasetoResult<Vec<u8>> {
    let (head, tail) = split_nonce(nonce)?;
    let mut subkey = hchacha20(head, key)?;
    let out = chacha::stream_xor_ic(message, tail, &subkey, counter);
    subkey.zeroize();
    out
}

/// XChaCha20 over the IETF engine (`0x00000000 || nonce[16..24]`, 32-bit counter).
///
/// # Errors
///
/// - `InvalidNonceSize` if `nonce` is not 24 bytes
/// - `InvalidKeySize` if `key` is not 32 bytes
/// - `CounterOverflow` if the last block index would exceed `u32::MAX`
pub fn ietf_stream_xor_ic(message: &[u8], nonce: &[u8], key: &[u8], counter: u32) -> PasetoResult<Vec<u8>> {
    let (head, tail) = split_nonce(nonce)?;
    let mut subkey = hchacha20(head, key)?;
    let mut inner = [0u8; chacha::IETF_NONCE_SIZE];
    inner[4..].copy_from_slice(tail);
    let out = chacha::ietf_stream_xor_ic(message, &inner, &subkey, counter);
    subkey.zeroize();
    out
}

/// Raw classic XChaCha20 keystream of `len` bytes.
///
/// # Errors
///
/// Same as [`stream_xor_ic`].
pub fn stream(len: usize, key: &[u8], nonce: &[u8], counter: u64) -> PasetoResult<Vec<u8>> {
    stream_xor_ic(&vec![0u8; len], nonce, key, counter)
}

/// Raw IETF XChaCha20 keystream of `len` bytes.
///
/// # Errors
///
/// Same as [`ietf_stream_xor_ic`].
pub fn ietf_stream(len: usize, key: &[u8], nonce: &[u8], counter: u32) -> PasetoResult<Vec<u8>> {
    ietf_stream_xor_ic(&vec![0u8; len], nonce, key, counter)
}

/// Encrypts with IETF XChaCha20.
///
/// # Errors
///
/// Same as [`ietf_stream_xor_ic`].
pub fn encrypt(message: &[u8], nonce: &[u8], key: &[u8], counter: u32) -> PasetoResult<Vec<u8>> {
    ietf_stream_xor_ic(message, nonce, key, counter)
}

/// Decrypts with IETF XChaCha20.
///
/// # Errors
///
/// Same as [`ietf_stream_xor_ic`].
pub fn decrypt(ciphertext: &[u8], nonce: &[u8], key: &[u8], counter: u32) -> PasetoResult<Vec<u8>> {
    ietf_stream_xor_ic(ciphertext, nonce, key, counter)
}
