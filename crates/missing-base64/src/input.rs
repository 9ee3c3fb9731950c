//! Input representations accepted by the tolerant decoder.

use crate::DecodeError;

/// Raw input for [`decode`](crate::decode): either text or bytes.
///
/// Both variants carry the same obligation - every element must be in the
/// ASCII range `0..=127` before any decoding happens. Two variants exist so
/// callers holding a `&str` and callers holding a `&[u8]` pass through the
/// same gate without converting up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Input<'a> {
    /// Text input; must be pure ASCII.
    Text(&'a str),
    /// Byte input; every byte must be below 128.
    Bytes(&'a [u8]),
}

impl<'a> Base64Input<'a> {
    /// Borrows the input as ASCII bytes.
    ///
    /// This is the single validation gate in front of decoding: it either
    /// hands back the raw bytes or rejects the input outright.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAscii`] when any element falls outside the
    /// ASCII range.
    ///
    /// # Example
    ///
    /// ```
    /// use missing_base64::Base64Input;
    ///
    /// assert_eq!(Base64Input::Text("Zm9v").ascii_bytes().unwrap(), b"Zm9v");
    /// assert!(Base64Input::Bytes(&[0x80]).ascii_bytes().is_err());
    /// ```
    pub fn ascii_bytes(self) -> Result<&'a [u8], DecodeError> {
        match self {
            Base64Input::Text(text) if text.is_ascii() => Ok(text.as_bytes()),
            Base64Input::Bytes(bytes) if bytes.is_ascii() => Ok(bytes),
            _ => Err(DecodeError::NotAscii),
        }
    }
}

impl<'a> From<&'a str> for Base64Input<'a> {
    fn from(text: &'a str) -> Self {
        Base64Input::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Base64Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Base64Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Base64Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Base64Input::Bytes(bytes)
    }
}
