//! Header checking and piece splitting for token strings.
//!
//! Tokens follow the format `{prefix}.{purpose}.{payload}[.{footer}]`
//! where payload and footer are unpadded base64url. PASERK seals carry
//! no footer.

use serde::de::DeserializeOwned;

use crate::core::encoding::{b64u_decode, b64u_encode, constant_time_eq};
use crate::core::error::{PasetoError, PasetoResult};
use crate::core::purpose::TokenPurpose;

/// The dot-separated pieces of a token after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPieces<'a> {
    /// Base64url payload.
    pub payload: &'a str,
    /// Base64url footer, if the token has a fourth piece.
    pub footer: Option<&'a str>,
}

/// Splits a token of purpose `P` into its payload and footer pieces.
///
/// # Errors
///
/// Returns `PasetoError::InvalidTokenFormat` if the header does not match
/// `P::HEADER` or the piece count is wrong for `P`.
pub fn split_token<P: TokenPurpose>(token: &str) -> PasetoResult<TokenPieces<'_>> {
    let rest = token
        .strip_prefix(P::HEADER)
        .ok_or(PasetoError::InvalidTokenFormat)?;

    let mut pieces = rest.split('.');
    let payload = pieces.next().ok_or(PasetoError::InvalidTokenFormat)?;
    let footer = pieces.next();

    if pieces.next().is_some() || (footer.is_some() && !P::HAS_FOOTER) {
        return Err(PasetoError::InvalidTokenFormat);
    }

    Ok(TokenPieces { payload, footer })
}

/// Builds `header || b64(payload) [|| "." || b64(footer)]`.
///
/// An empty footer is omitted.
#[must_use]
pub fn join_token<P: TokenPurpose>(payload: &[u8], footer: &[u8]) -> String {
    let mut token = String::from(P::HEADER);
    token.push_str(&b64u_encode(payload));
    if !footer.is_empty() {
        token.push('.');
        token.push_str(&b64u_encode(footer));
    }
    token
}

fn footer_piece(token: &str) -> PasetoResult<&str> {
    let pieces: Vec<&str> = token.split('.').collect();
    match pieces.len() {
        4 => Ok(pieces[3]),
        3 => Err(PasetoError::MissingFooter),
        _ => Err(PasetoError::InvalidTokenFormat),
    }
}

/// Returns the decoded footer of a token without verifying it.
///
/// # Errors
///
/// - `MissingFooter` if the token has no fourth piece
/// - `InvalidTokenFormat` if it is not a token at all
/// - `Base64Decode` if the footer is not base64url
pub fn get_footer(token: &str) -> PasetoResult<Vec<u8>> {
    b64u_decode(footer_piece(token)?)
}

/// Returns the footer parsed as JSON.
///
/// # Errors
///
/// As [`get_footer`], plus `Json` if the footer is not valid JSON for `T`.
pub fn get_footer_json<T: DeserializeOwned>(token: &str) -> PasetoResult<T> {
    let footer = get_footer(token)?;
    Ok(serde_json::from_slice(&footer)?)
}

/// Compares the token's footer with `expected` in constant time.
///
/// # Errors
///
/// As [`get_footer`].
pub fn assert_footer(token: &str, expected: &[u8]) -> PasetoResult<bool> {
    let stored = get_footer(token)?;
    Ok(constant_time_eq(&stored, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::purpose::{Local, Public, Seal};

    #[test]
    fn test_split_token_without_footer() -> PasetoResult<()> {
        let pieces = split_token::<Local>("v4.local.cGF5bG9hZA")?;
        assert_eq!(pieces.payload, "cGF5bG9hZA");
        assert_eq!(pieces.footer, None);
        Ok(())
    }

    #[test]
    fn test_split_token_with_footer() -> PasetoResult<()> {
        let pieces = split_token::<Public>("v4.public.cGF5bG9hZA.Zm9vdGVy")?;
        assert_eq!(pieces.payload, "cGF5bG9hZA");
        assert_eq!(pieces.footer, Some("Zm9vdGVy"));
        Ok(())
    }

    #[test]
    fn test_split_token_wrong_header() {
        let result = split_token::<Local>("v4.public.cGF5bG9hZA");
        assert!(matches!(result, Err(PasetoError::InvalidTokenFormat)));

        let result = split_token::<Local>("v3.local.cGF5bG9hZA");
        assert!(matches!(result, Err(PasetoError::InvalidTokenFormat)));

        let result = split_token::<Local>("v4.local");
        assert!(matches!(result, Err(PasetoError::InvalidTokenFormat)));

        let result = split_token::<Local>("");
        assert!(matches!(result, Err(PasetoError::InvalidTokenFormat)));
    }

    #[test]
    fn test_split_token_too_many_pieces() {
        let result = split_token::<Local>("v4.local.a.b.c");
        assert!(matches!(result, Err(PasetoError::InvalidTokenFormat)));
    }

    #[test]
    fn test_split_seal_rejects_footer() -> PasetoResult<()> {
        let pieces = split_token::<Seal>("k4.seal.cGF5bG9hZA")?;
        assert_eq!(pieces.payload, "cGF5bG9hZA");

        let result = split_token::<Seal>("k4.seal.cGF5bG9hZA.Zm9vdGVy");
        assert!(matches!(result, Err(PasetoError::InvalidTokenFormat)));
        Ok(())
    }

    #[test]
    fn test_join_token() {
        assert_eq!(join_token::<Local>(b"payload", b""), "v4.local.cGF5bG9hZA");
        assert_eq!(
            join_token::<Public>(b"payload", b"footer"),
            "v4.public.cGF5bG9hZA.Zm9vdGVy"
        );
    }

    #[test]
    fn test_get_footer() -> PasetoResult<()> {
        assert_eq!(get_footer("v4.local.cGF5bG9hZA.Zm9vdGVy")?, b"footer");
        Ok(())
    }

    #[test]
    fn test_get_footer_missing() {
        let result = get_footer("v4.local.cGF5bG9hZA");
        assert!(matches!(result, Err(PasetoError::MissingFooter)));

        let result = get_footer("v4.local");
        assert!(matches!(result, Err(PasetoError::InvalidTokenFormat)));
    }

    #[test]
    fn test_get_footer_json() -> PasetoResult<()> {
        let token = join_token::<Local>(b"payload", br#"{"kid":"k1"}"#);
        let footer: serde_json::Value = get_footer_json(&token)?;
        assert_eq!(footer["kid"], "k1");
        Ok(())
    }

    #[test]
    fn test_assert_footer() -> PasetoResult<()> {
        let token = "v4.local.cGF5bG9hZA.Zm9vdGVy";
        assert!(assert_footer(token, b"footer")?);
        assert!(!assert_footer(token, b"footex")?);
        assert!(!assert_footer(token, b"foot")?);
        Ok(())
    }
}
