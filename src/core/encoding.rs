//! Encoding primitives shared by every protocol layer.
//!
//! - unpadded base64url (`A-Z a-z 0-9 - _`)
//! - constant-time byte comparison
//! - little-endian packing of 32/64-bit integers

use base64::prelude::*;
use subtle::ConstantTimeEq;

use crate::core::error::PasetoResult;

/// Encodes bytes as unpadded base64url.
#[must_use]
pub fn b64u_encode(bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes unpadded base64url.
///
/// # Errors
///
/// Returns `PasetoError::Base64Decode` on padding, foreign alphabet
/// characters, or an impossible length (`len % 4 == 1`).
pub fn b64u_decode(encoded: &str) -> PasetoResult<Vec<u8>> {
    Ok(BASE64_URL_SAFE_NO_PAD.decode(encoded)?)
}

/// Compares two byte strings in time independent of their contents.
///
/// Differing lengths return `false` immediately; only the length leaks.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Packs a `u32` little-endian.
#[must_use]
pub const fn le32(n: u32) -> [u8; 4] {
    n.to_le_bytes()
}

/// Packs a `u64` little-endian.
#[must_use]
pub const fn le64(n: u64) -> [u8; 8] {
    n.to_le_bytes()
}

/// Loads a little-endian `u32` from exactly four bytes.
#[must_use]
pub const fn load32_le(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Reads `4 * N` bytes into little-endian words.
pub(crate) fn words_le<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut out = [0u32; N];
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = load32_le([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PasetoError;
    use proptest::prelude::*;

    const B64U_MAPPING: &[(&str, &[u8])] = &[
        ("", &[]),
        ("QQ", &[0x41]),
        ("QUI", &[0x41, 0x42]),
        ("QUJD", &[0x41, 0x42, 0x43]),
        ("QUJDRA", &[0x41, 0x42, 0x43, 0x44]),
        ("QUJDREU", &[0x41, 0x42, 0x43, 0x44, 0x45]),
    ];

    #[test]
    fn test_b64u_encode() {
        for (encoded, raw) in B64U_MAPPING {
            assert_eq!(b64u_encode(raw), *encoded);
        }
    }

    #[test]
    fn test_b64u_decode() -> PasetoResult<()> {
        for (encoded, raw) in B64U_MAPPING {
            assert_eq!(b64u_decode(encoded)?, *raw);
        }
        Ok(())
    }

    #[test]
    fn test_b64u_url_safe_alphabet() -> PasetoResult<()> {
        let raw = [0xfb, 0xff, 0xbf];
        assert_eq!(b64u_encode(&raw), "-_-_");
        assert_eq!(b64u_decode("-_-_")?, raw);
        Ok(())
    }

    #[test]
    fn test_b64u_rejects_padding_and_std_alphabet() {
        assert!(matches!(b64u_decode("QQ=="), Err(PasetoError::Base64Decode(_))));
        assert!(matches!(b64u_decode("+/+/"), Err(PasetoError::Base64Decode(_))));
        assert!(matches!(b64u_decode("Q"), Err(PasetoError::Base64Decode(_))));
    }

    #[test]
    fn test_le64() {
        let mapping: &[(u64, [u8; 8])] = &[
            (0, [0; 8]),
            (1, [1, 0, 0, 0, 0, 0, 0, 0]),
            (255, [255, 0, 0, 0, 0, 0, 0, 0]),
            (256, [0, 1, 0, 0, 0, 0, 0, 0]),
            (65535, [255, 255, 0, 0, 0, 0, 0, 0]),
            (65537, [1, 0, 1, 0, 0, 0, 0, 0]),
            ((1 << 53) - 1, [255, 255, 255, 255, 255, 255, 31, 0]),
            (u64::MAX, [255; 8]),
        ];
        for (n, packed) in mapping {
            assert_eq!(le64(*n), *packed);
        }
    }

    #[test]
    fn test_le32_load32_le() {
        assert_eq!(le32(0x0403_0201), [1, 2, 3, 4]);
        assert_eq!(load32_le([1, 2, 3, 4]), 0x0403_0201);
    }

    #[test]
    fn test_words_le() {
        let words: [u32; 2] = words_le(&[1, 0, 0, 0, 0, 0, 0, 0x80]);
        assert_eq!(words, [1, 0x8000_0000]);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(!constant_time_eq(b"xbc", b"abc"));
    }

    proptest! {
        #[test]
        fn b64u_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
            let encoded = b64u_encode(&data);
            prop_assert!(!encoded.contains('='));
            prop_assert_eq!(b64u_decode(&encoded).unwrap(), data);
        }
    }
}
