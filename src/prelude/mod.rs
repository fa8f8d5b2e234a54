//! Ergonomic layer for token operations.
//!
//! The prelude re-exports the key holders, the footer type, the decomposed
//! token parts and the error type.
//!
//! # Usage
//!
//! ```rust
//! use paseto_v4::prelude::*;
//!
//! let key = PasetoV4Local::generate()?;
//! let token = key.encrypt(b"claims", Footer::empty(), b"")?;
//! assert_eq!(key.decrypt(&token, b"")?, b"claims");
//! # Ok::<(), PasetoError>(())
//! ```

pub use crate::core::error::{PasetoError, PasetoResult};
pub use crate::core::operations::local::LocalParts;
pub use crate::core::operations::public::PublicParts;
pub use crate::core::operations::seal::SealParts;
pub use crate::core::types::{Footer, PaserkK4Seal, PasetoV4Local, PasetoV4Public};
