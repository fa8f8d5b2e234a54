//! Token purpose markers and traits.
//!
//! This module provides zero-sized type markers for each wire format this
//! crate produces and the header and piece-count rules that go with it.

use core::fmt::{self, Display};

mod private {
    pub trait Sealed {}
}

/// Trait for token purpose markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
/// Each marker (`Local`, `Public`, `Seal`) carries the header its tokens
/// start with and the number of dot-separated pieces it may have.
pub trait TokenPurpose: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// The version prefix ("v4" or "k4")
    const PREFIX: &'static str;

    /// The purpose name ("local", "public" or "seal")
    const PURPOSE: &'static str;

    /// The full header with trailing dot (e.g., "v4.local.")
    const HEADER: &'static str;

    /// Whether a trailing footer piece is allowed.
    const HAS_FOOTER: bool;
}

// =============================================================================
// PASETO v4.local
// =============================================================================

/// `v4.local` marker: symmetric authenticated encryption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Local;

impl private::Sealed for Local {}

impl TokenPurpose for Local {
    const PREFIX: &'static str = "v4";
    const PURPOSE: &'static str = "local";
    const HEADER: &'static str = "v4.local.";
    const HAS_FOOTER: bool = true;
}

// =============================================================================
// PASETO v4.public
// =============================================================================

/// `v4.public` marker: Ed25519 signed tokens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Public;

impl private::Sealed for Public {}

impl TokenPurpose for Public {
    const PREFIX: &'static str = "v4";
    const PURPOSE: &'static str = "public";
    const HEADER: &'static str = "v4.public.";
    const HAS_FOOTER: bool = true;
}

// =============================================================================
// PASERK k4.seal
// =============================================================================

/// `k4.seal` marker: a local key wrapped to an X25519 public key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seal;

impl private::Sealed for Seal {}

impl TokenPurpose for Seal {
    const PREFIX: &'static str = "k4";
    const PURPOSE: &'static str = "seal";
    const HEADER: &'static str = "k4.seal.";
    const HAS_FOOTER: bool = false;
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}.{}", Self::PREFIX, Self::PURPOSE)
                }
            }
        )*
    };
}

impl_display!(Local, Public, Seal);
