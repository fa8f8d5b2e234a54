//! Cryptographic operations.
//!
//! This module provides the primitives and protocol constructions:
//!
//! - [`chacha`] - ChaCha20 block function and counter-mode keystream
//! - [`xchacha`] - HChaCha20 and XChaCha20
//! - [`pae`] - Pre-Authentication Encoding
//! - [`hash`] - BLAKE2b key derivation helpers
//! - [`random`] - Operating system randomness
//! - [`local`] - `v4.local` encryption (requires `v4`)
//! - [`public`] - `v4.public` signatures (requires `v4`)
//! - [`seal`] - `k4.seal` key wrapping (requires `v4`)

pub mod chacha;
pub mod hash;
pub mod pae;
pub mod random;
pub mod xchacha;

#[cfg(feature = "v4")]
pub mod local;
#[cfg(feature = "v4")]
pub mod public;
#[cfg(feature = "v4")]
pub mod seal;
