//! PASETO v4 tokens and PASERK `k4.seal` key wrapping.
//!
//! This crate implements the two PASETO v4 purposes and the PASERK seal
//! format on top of a native ChaCha20/XChaCha20 engine. BLAKE2b, Ed25519 and
//! X25519 come from the RustCrypto and dalek crates.
//!
//! # Quick Start
//!
//! ```rust
//! use paseto_v4::{PaserkK4Seal, PasetoV4Local, PasetoV4Public};
//!
//! // v4.local: symmetric authenticated encryption
//! let local = PasetoV4Local::generate()?;
//! let token = local.encrypt(b"secret claims", "kid-1", b"")?;
//! assert_eq!(local.decrypt(&token, b"")?, b"secret claims");
//!
//! // v4.public: Ed25519 signatures
//! let signer = PasetoV4Public::generate()?;
//! let token = signer.sign(b"public claims", "", b"")?;
//! assert_eq!(signer.verify(&token, b"")?, b"public claims");
//!
//! // k4.seal: wrap the local key to the signer's Ed25519 identity
//! let recipient = PaserkK4Seal::from_v4_public(&signer);
//! let sealed = recipient.wrap(&local)?;
//! assert_eq!(recipient.unwrap(&sealed)?, local);
//! # Ok::<(), paseto_v4::PasetoError>(())
//! ```
//!
//! # Formats
//!
//! | Type | Format | Payload |
//! |------|--------|---------|
//! | `v4.local` | `v4.local.{data}[.{footer}]` | `n(32) \|\| c \|\| t(32)` |
//! | `v4.public` | `v4.public.{data}[.{footer}]` | `m \|\| sig(64)` |
//! | `k4.seal` | `k4.seal.{data}` | `tag(32) \|\| epk(32) \|\| edk(32)` |
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! paseto-v4 = "0.1"  # v4 + prelude (default)
//! paseto-v4 = { version = "0.1", default-features = false }  # cipher engine, PAE, encoding only
//! ```
//!
//! # Security
//!
//! - Key material is zeroized on drop
//! - Debug output redacts secret keys
//! - Tags are compared in constant time before any plaintext is produced
//! - Randomness comes only from the operating system
//! - No unsafe code
//!
//! # Logging
//!
//! Token production and verification failures are reported through
//! `tracing` at `debug` level. Key material, nonces, tags and plaintext are
//! never logged.
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::error::{PasetoError, PasetoResult};
pub use core::purpose::{Local, Public, Seal, TokenPurpose};
pub use core::types::Footer;

#[cfg(feature = "v4")]
pub use core::types::{PaserkK4Seal, PasetoV4Local, PasetoV4Public};
