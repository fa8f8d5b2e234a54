//! `Footer` - unencrypted, authenticated trailing data.
//!
//! A footer is either raw bytes or text. JSON footers are serialized once
//! with [`Footer::json`]. Protocol code only ever sees [`Footer::as_bytes`].

use std::borrow::Cow;

use serde::Serialize;

use crate::core::error::PasetoResult;

/// Footer input for token producers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer<'a> {
    /// Raw bytes.
    Bytes(Cow<'a, [u8]>),
    /// UTF-8 text, including serialized JSON.
    Text(Cow<'a, str>),
}

impl<'a> Footer<'a> {
    /// An empty footer; tokens produced with it have no fourth piece.
    #[must_use]
    pub const fn empty() -> Self {
        Footer::Bytes(Cow::Borrowed(&[]))
    }

    /// Serializes `value` as a JSON footer.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::Json` if `value` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> PasetoResult<Footer<'static>> {
        Ok(Footer::Text(Cow::Owned(serde_json::to_string(value)?)))
    }

    /// Returns the footer bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Footer::Bytes(bytes) => bytes,
            Footer::Text(text) => text.as_bytes(),
        }
    }

    /// Returns `true` if the footer has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl Default for Footer<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl AsRef<[u8]> for Footer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl<'a> From<&'a str> for Footer<'a> {
    fn from(text: &'a str) -> Self {
        Footer::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Footer<'a> {
    fn from(text: &'a String) -> Self {
        Footer::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Footer<'static> {
    fn from(text: String) -> Self {
        Footer::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a [u8]> for Footer<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Footer::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Footer<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Footer::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl<'a> From<&'a Vec<u8>> for Footer<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Footer::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for Footer<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Footer::Bytes(Cow::Owned(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Footer::empty().is_empty());
        assert!(Footer::default().is_empty());
        assert!(Footer::from("").is_empty());
    }

    #[test]
    fn test_text_and_bytes_agree() {
        let owned = String::from("kid");
        assert_eq!(Footer::from("kid").as_bytes(), b"kid");
        assert_eq!(Footer::from(&owned).as_bytes(), b"kid");
        assert_eq!(Footer::from(owned.clone()).as_bytes(), b"kid");
        assert_eq!(Footer::from(b"kid").as_bytes(), b"kid");
        assert_eq!(Footer::from(&b"kid"[..]).as_bytes(), b"kid");
        assert_eq!(Footer::from(b"kid".to_vec()).as_bytes(), b"kid");
        assert_eq!(Footer::from(&b"kid".to_vec()).as_bytes(), b"kid");
    }

    #[test]
    fn test_json() -> PasetoResult<()> {
        let footer = Footer::json(&serde_json::json!({"kid": "k4.lid.x"}))?;
        assert_eq!(footer.as_bytes(), br#"{"kid":"k4.lid.x"}"#);
        assert!(matches!(footer, Footer::Text(_)));
        Ok(())
    }
}
