//! Integration tests using PASETO v4 and PASERK k4.seal test vectors.
//!
//! Success vectors must decrypt, verify or unseal to the recorded values;
//! `expect-fail` vectors must be rejected.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

#[cfg(feature = "v4")]
mod vectors;

#[cfg(feature = "v4")]
use std::path::PathBuf;
#[cfg(feature = "v4")]
use vectors::*;

/// Get the path to the test vectors directory.
#[cfg(feature = "v4")]
fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

#[cfg(feature = "v4")]
mod v4_tests {
    use super::*;
    use paseto_v4::{PaserkK4Seal, PasetoV4Local, PasetoV4Public};

    #[test]
    fn test_v4_local_vectors() {
        let path = vectors_dir().join("v4.local.json");
        let suite: TestVectorSuite<LocalTokenVector> =
            load_vectors(path.to_str().expect("valid path"));
        assert!(!suite.tests.is_empty());

        for test in suite.tests {
            let key_bytes = hex_decode(&test.key).expect("valid hex");
            let key = PasetoV4Local::new(&key_bytes).expect("32-byte key");
            let implicit = test.implicit_assertion.as_bytes();

            if test.expect_fail {
                assert!(
                    key.decrypt(&test.token, implicit).is_err(),
                    "Test '{}' should have failed but succeeded",
                    test.name
                );
                continue;
            }

            let payload = test.payload.as_ref().expect("payload required for success test");
            let decrypted = key
                .decrypt_str(&test.token, implicit)
                .unwrap_or_else(|e| panic!("Test '{}' decryption failed: {e}", test.name));
            assert_eq!(&decrypted, payload, "Test '{}' payload mismatch", test.name);

            if test.footer.is_empty() {
                assert_eq!(test.token.split('.').count(), 3, "Test '{}'", test.name);
            } else {
                let footer = PasetoV4Local::get_footer(&test.token).expect("footer present");
                assert_eq!(footer, test.footer.as_bytes(), "Test '{}' footer mismatch", test.name);
            }

            let nonce = hex_decode(test.nonce.as_ref().expect("nonce")).expect("valid hex");
            let parts = PasetoV4Local::decompose(&test.token).expect("decompose");
            assert_eq!(parts.nonce.as_slice(), nonce.as_slice(), "Test '{}' nonce", test.name);
        }
    }

    #[test]
    fn test_v4_public_vectors() {
        let path = vectors_dir().join("v4.public.json");
        let suite: TestVectorSuite<PublicTokenVector> =
            load_vectors(path.to_str().expect("valid path"));
        assert!(!suite.tests.is_empty());

        for test in suite.tests {
            let public_key = hex_decode(&test.public_key).expect("valid hex");
            let secret_key = hex_decode(&test.secret_key).expect("valid hex");
            let keys = PasetoV4Public::new(&public_key, Some(&secret_key))
                .unwrap_or_else(|e| panic!("Test '{}' key load failed: {e}", test.name));
            let seed = hex_decode(&test.secret_key_seed).expect("valid hex");
            assert_eq!(&keys.secret_key().expect("secret key")[..32], seed.as_slice());

            let implicit = test.implicit_assertion.as_bytes();

            if test.expect_fail {
                assert!(
                    keys.verify(&test.token, implicit).is_err(),
                    "Test '{}' should have failed but succeeded",
                    test.name
                );
                continue;
            }

            let payload = test.payload.as_ref().expect("payload required for success test");

            // Ed25519 is deterministic, so signing reproduces the token
            let signed = keys
                .sign(payload.as_bytes(), test.footer.as_str(), implicit)
                .unwrap_or_else(|e| panic!("Test '{}' signing failed: {e}", test.name));
            assert_eq!(signed, test.token, "Test '{}' signing mismatch", test.name);

            let verifier = PasetoV4Public::new(&public_key, None).expect("public key");
            let verified = verifier
                .verify_str(&test.token, implicit)
                .unwrap_or_else(|e| panic!("Test '{}' verification failed: {e}", test.name));
            assert_eq!(&verified, payload, "Test '{}' payload mismatch", test.name);
        }
    }

    #[test]
    fn test_k4_seal_vectors() {
        let path = vectors_dir().join("k4.seal.json");
        let suite: TestVectorSuite<SealTestVector> =
            load_vectors(path.to_str().expect("valid path"));
        assert!(!suite.tests.is_empty());

        for test in suite.tests {
            let pk = hex_decode(&test.sealing_public_key).expect("valid hex");
            let sk = hex_decode(&test.sealing_secret_key).expect("valid hex");
            let recipient = PaserkK4Seal::from_edwards_keys(&pk, Some(&sk))
                .unwrap_or_else(|e| panic!("Test '{}' key load failed: {e}", test.name));

            if test.expect_fail {
                assert!(
                    recipient.unwrap(&test.paserk).is_err(),
                    "Test '{}' should have failed but succeeded",
                    test.name
                );
                continue;
            }

            let unsealed = hex_decode(test.unsealed.as_ref().expect("unsealed required"))
                .expect("valid hex");
            let key = recipient
                .unwrap(&test.paserk)
                .unwrap_or_else(|e| panic!("Test '{}' unseal failed: {e}", test.name));
            assert_eq!(key.key().as_slice(), unsealed.as_slice(), "Test '{}'", test.name);

            // A fresh seal to the same recipient must open to the same key
            let resealed = recipient.wrap(&key).expect("wrap");
            assert_ne!(resealed, test.paserk);
            assert_eq!(recipient.unwrap(&resealed).expect("unwrap"), key);
        }
    }
}
