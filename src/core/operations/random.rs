//! Operating system randomness.
//!
//! The only entropy source is `OsRng`. It is asked for bytes on every call
//! and a failure is surfaced as `RandomSource`; there is no fallback.

use rand_core::{OsRng, TryRngCore};

use crate::core::error::{PasetoError, PasetoResult};

/// Fills `dest` from the operating system CSPRNG.
///
/// # Errors
///
/// Returns `PasetoError::RandomSource` if the OS source fails.
pub fn fill_random(dest: &mut [u8]) -> PasetoResult<()> {
    OsRng.try_fill_bytes(dest).map_err(|_| PasetoError::RandomSource)
}

/// Returns `N` random bytes.
///
/// # Errors
///
/// Returns `PasetoError::RandomSource` if the OS source fails.
pub fn random_bytes<const N: usize>() -> PasetoResult<[u8; N]> {
    let mut out = [0u8; N];
    fill_random(&mut out)?;
    Ok(out)
}
