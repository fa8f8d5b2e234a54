//! Core types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`purpose`] - Purpose markers (`Local`, `Public`, `Seal`) and their headers
//! - [`error`] - Error types for all operations
//! - [`encoding`] - Base64url, constant-time comparison and little-endian packing
//! - [`header`] - Token splitting and footer helpers
//! - [`types`] - Key holders (`PasetoV4Local`, `PasetoV4Public`, `PaserkK4Seal`)
//! - [`operations`] - Cipher engine, PAE and the protocol constructions

pub mod encoding;
pub mod error;
pub mod header;
pub mod operations;
pub mod purpose;
pub mod types;

// Re-export commonly used items
pub use error::{PasetoError, PasetoResult};
pub use purpose::{Local, Public, Seal, TokenPurpose};
