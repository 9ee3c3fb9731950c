//! Tolerant base64 decoding function for byte input.

use crate::decode::decode;
use crate::input::Base64Input;
use crate::DecodeError;

/// Decodes base64 bytes to bytes, tolerating missing characters.
///
/// # Arguments
///
/// * `view` - The base64-encoded bytes to decode. Every byte must be below
///   128.
///
/// # Returns
///
/// The decoded bytes. When the input was truncated, the result is a best
/// effort and its tail may differ from the original data.
///
/// # Example
///
/// ```
/// use missing_base64::from_base64_bin;
///
/// let decoded = from_base64_bin(b"aGVsbG8=").unwrap();
/// assert_eq!(decoded, b"hello");
///
/// // Byte 200 is outside the ASCII range, so the gate rejects it.
/// assert!(from_base64_bin(&[b'a', 200]).is_err());
/// ```
pub fn from_base64_bin(view: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode(Base64Input::Bytes(view))
}
