//! ChaCha20 stream cipher engine.
//!
//! Two state layouts share one block function:
//!
//! - classic: 8-byte nonce, 64-bit block counter in words 12 and 13
//! - IETF (RFC 8439): 12-byte nonce, 32-bit block counter in word 12
//!
//! Every entry point returns a fresh buffer of the message length. A message
//! that would need a block index past the counter width is rejected with
//! `CounterOverflow` before any keystream is produced.

use zeroize::Zeroize;

use crate::core::encoding::{le32, words_le};
use crate::core::error::{PasetoError, PasetoResult};

/// ChaCha20 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Classic ChaCha20 nonce size in bytes.
pub const NONCE_SIZE: usize = 8;

/// IETF ChaCha20 nonce size in bytes.
pub const IETF_NONCE_SIZE: usize = 12;

/// Keystream block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// "expand 32-byte k"
pub(crate) const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Applies the ChaCha quarter round to four words of `state`.
pub fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// Runs the 20-round permutation (10 column/diagonal double rounds).
pub fn permute(state: &mut [u32; 16]) {
    for _ in 0..10 {
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Builds `sigma || key || tail` where `tail` holds counter and nonce words.
pub(crate) fn initial_state(key: &[u32; 8], tail: [u32; 4]) -> [u32; 16] {
    let mut state = [0u32; 16];
    state[..4].copy_from_slice(&SIGMA);
    state[4..12].copy_from_slice(key);
    state[12..].copy_from_slice(&tail);
    state
}

pub(crate) fn key_words(key: &[u8]) -> PasetoResult<[u32; 8]> {
    if key.len() != KEY_SIZE {
        return Err(PasetoError::InvalidKeySize);
    }
    Ok(words_le(key))
}

// ===== Block function =====

fn block(input: &[u32; 16], out: &mut [u8; BLOCK_SIZE]) {
    let mut working = *input;
    permute(&mut working);
    for ((bytes, word), init) in out.chunks_exact_mut(4).zip(working.iter()).zip(input.iter()) {
        bytes.copy_from_slice(&le32(word.wrapping_add(*init)));
    }
    working.zeroize();
}

fn block_count(len: usize) -> u64 {
    len.div_ceil(BLOCK_SIZE) as u64
}

fn advance_classic(state: &mut [u32; 16]) {
    state[12] = state[12].wrapping_add(1);
    if state[12] == 0 {
        state[13] = state[13].wrapping_add(1);
    }
}

fn advance_ietf(state: &mut [u32; 16]) {
    state[12] = state[12].wrapping_add(1);
}

fn xor_keystream(message: &[u8], mut state: [u32; 16], advance: fn(&mut [u32; 16])) -> Vec<u8> {
    let mut out = Vec::with_capacity(message.len());
    let mut keystream = [0u8; BLOCK_SIZE];
    for chunk in message.chunks(BLOCK_SIZE) {
        block(&state, &mut keystream);
        out.extend(chunk.iter().zip(keystream.iter()).map(|(m, k)| m ^ k));
        advance(&mut state);
    }
    keystream.zeroize();
    state.zeroize();
    out
}

// ===== Entry points =====

/// Classic ChaCha20: XORs `message` with the keystream starting at block `counter`.
///
/// # Errors
///
/// - `InvalidNonceSize` if `nonce` is not 8 bytes
/// - `InvalidKeySize` if `key` is not 32 bytes
/// - `CounterOverflow` if the last block index would exceed `u64::MAX`
pub fn stream_xor_ic(message: &[u8], nonce: &[u8], key: &[u8], counter: u64) -> PasetoResult<Vec<u8>> {
    if nonce.len() != NONCE_SIZE {
        return Err(PasetoError::InvalidNonceSize);
    }
    let key = key_words(key)?;
    let blocks = block_count(message.len());
    if blocks > 0 && counter.checked_add(blocks - 1).is_none() {
        return Err(PasetoError::CounterOverflow);
    }

    let nonce: [u32; 2] = words_le(nonce);
    let state = initial_state(&key, [counter as u32, (counter >> 32) as u32, nonce[0], nonce[1]]);
    Ok(xor_keystream(message, state, advance_classic))
}

/// IETF ChaCha20 (RFC 8439): XORs `message` with the keystream starting at block `counter`.
///
/// # Errors
///
/// - `InvalidNonceSize` if `nonce` is not 12 bytes
/// - `InvalidKeySize` if `key` is not 32 bytes
/// - `CounterOverflow` if the last block index would exceed `u32::MAX`
pub fn ietf_stream_xor_ic(message: &[u8], nonce: &[u8], key: &[u8], counter: u32) -> PasetoResult<Vec<u8>> {
    if nonce.len() != IETF_NONCE_SIZE {
        return Err(PasetoError::InvalidNonceSize);
    }
    let key = key_words(key)?;
    let blocks = block_count(message.len());
    if blocks > 0 && u64::from(counter) + (blocks - 1) > u64::from(u32::MAX) {
        return Err(PasetoError::CounterOverflow);
    }

    let nonce: [u32; 3] = words_le(nonce);
    let state = initial_state(&key, [counter, nonce[0], nonce[1], nonce[2]]);
    Ok(xor_keystream(message, state, advance_ietf))
}

/// Raw classic keystream of `len` bytes.
///
/// # Errors
///
/// Same as [`stream_xor_ic`].
pub fn stream(len: usize, nonce: &[u8], key: &[u8], counter: u64) -> PasetoResult<Vec<u8>> {
    stream_xor_ic(&vec![0u8; len], nonce, key, counter)
}

/// Raw IETF keystream of `len` bytes.
///
/// # Errors
///
/// Same as [`ietf_stream_xor_ic`].
pub fn ietf_stream(len: usize, nonce: &[u8], key: &[u8], counter: u32) -> PasetoResult<Vec<u8>> {
    ietf_stream_xor_ic(&vec![0u8; len], nonce, key, counter)
}

/// XORs `message` with a keystream whose variant is chosen by the nonce length.
///
/// An 8-byte nonce selects the classic variant, a 12-byte nonce the IETF one
/// (the counter must then fit in 32 bits).
///
/// # Errors
///
/// - `InvalidNonceSize` for any other nonce length
/// - `CounterOverflow` if the counter does not fit the selected variant
/// - `InvalidKeySize` if `key` is not 32 bytes
pub fn keystream_xor(key: &[u8], nonce: &[u8], counter: u64, message: &[u8]) -> PasetoResult<Vec<u8>> {
    match nonce.len() {
        NONCE_SIZE => stream_xor_ic(message, nonce, key, counter),
        IETF_NONCE_SIZE => {
            let counter = u32::try_from(counter).map_err(|_| PasetoError::CounterOverflow)?;
            ietf_stream_xor_ic(message, nonce, key, counter)
        }
        _ => Err(PasetoError::InvalidNonceSize),
    }
}
