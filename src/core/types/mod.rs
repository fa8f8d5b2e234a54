//! Key holder types.
//!
//! This module provides the first-class types for producing and consuming
//! tokens:
//!
//! - [`PasetoV4Local`] - Symmetric key (`v4.local.{data}`)
//! - [`PasetoV4Public`] - Ed25519 keys (`v4.public.{data}`)
//! - [`PaserkK4Seal`] - X25519 recipient (`k4.seal.{data}`)
//! - [`Footer`] - Footer input shared by token producers

mod footer;

#[cfg(feature = "v4")]
mod local;
#[cfg(feature = "v4")]
mod public;
#[cfg(feature = "v4")]
mod seal;

pub use footer::Footer;

#[cfg(feature = "v4")]
pub use local::PasetoV4Local;
#[cfg(feature = "v4")]
pub use public::PasetoV4Public;
#[cfg(feature = "v4")]
pub use seal::{PaserkK4Seal, X25519_KEY_SIZE};
