//! Test vector types for PASETO v4 and PASERK k4.seal tests.
//!
//! The JSON layout follows the paseto-standard/test-vectors repository:
//! a named suite holding a list of cases, each with an `expect-fail` flag.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

// =============================================================================
// PASETO token types (v4.local, v4.public)
// =============================================================================

/// Test vector for `v4.local` tokens.
#[derive(Debug, Deserialize)]
pub struct LocalTokenVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded symmetric key
    pub key: String,
    /// Hex-encoded nonce (null for fail tests)
    pub nonce: Option<String>,
    /// Token to decrypt
    pub token: String,
    /// Expected plaintext (null for fail tests)
    pub payload: Option<String>,
    pub footer: String,
    #[serde(rename = "implicit-assertion")]
    pub implicit_assertion: String,
}

/// Test vector for `v4.public` tokens.
#[derive(Debug, Deserialize)]
pub struct PublicTokenVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded Ed25519 public key
    #[serde(rename = "public-key")]
    pub public_key: String,
    /// Hex-encoded Ed25519 secret key (`seed || public key`)
    #[serde(rename = "secret-key")]
    pub secret_key: String,
    /// Hex-encoded Ed25519 seed
    #[serde(rename = "secret-key-seed")]
    pub secret_key_seed: String,
    /// Token to verify
    pub token: String,
    /// Expected message (null for fail tests)
    pub payload: Option<String>,
    pub footer: String,
    #[serde(rename = "implicit-assertion")]
    pub implicit_assertion: String,
}

// =============================================================================
// Public Key Encryption Type (seal)
// =============================================================================

/// Test vector for `k4.seal` (PKE-encrypted symmetric key).
#[derive(Debug, Deserialize)]
pub struct SealTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded Ed25519 secret key of the recipient
    #[serde(rename = "sealing-secret-key")]
    pub sealing_secret_key: String,
    /// Hex-encoded Ed25519 public key of the recipient
    #[serde(rename = "sealing-public-key")]
    pub sealing_public_key: String,
    /// Hex-encoded unsealed (plaintext) symmetric key
    pub unsealed: Option<String>,
    /// PASERK sealed key string
    pub paserk: String,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
