//! Tolerant base64 decoding function for text input.

use crate::decode::decode;
use crate::input::Base64Input;
use crate::DecodeError;

/// Decodes a base64 string to bytes, tolerating missing characters.
///
/// # Arguments
///
/// * `encoded` - The base64-encoded text to decode. Must be pure ASCII.
///
/// # Returns
///
/// The decoded bytes. When the input was truncated, the result is a best
/// effort and its tail may differ from the original data.
///
/// # Example
///
/// ```
/// use missing_base64::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
///
/// // The same text with its last two characters lost still decodes.
/// let decoded = from_base64("aGVsbG8gd29ybG").unwrap();
/// assert_eq!(decoded, b"hello worl");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode(Base64Input::Text(encoded))
}
