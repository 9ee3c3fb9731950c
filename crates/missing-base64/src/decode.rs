//! Tolerant two-attempt base64 decoding function.

use crate::constants::{PAD, PLACEHOLDER};
use crate::decode_relaxed::decode_relaxed;
use crate::input::Base64Input;
use crate::{Base64Error, DecodeError};

/// Decodes a possibly-incomplete base64 input to bytes.
///
/// The input may be text or bytes ([`Base64Input`]); either way every
/// element must be in the ASCII range. All `=` bytes count as padding noise
/// and are stripped wherever they appear, then decoding runs in at most two
/// attempts:
///
/// 1. The stripped payload plus two `=` bytes goes through
///    [`decode_relaxed`]. This covers payloads whose data-character count
///    is 0, 2, or 3 modulo 4.
/// 2. If, and only if, that fails with [`Base64Error::InvalidAlignment`]
///    (count 1 modulo 4), the [`PLACEHOLDER`] sextet is inserted ahead of
///    the padding and decoding runs once more.
///
/// Any other failure propagates unchanged, and nothing is ever retried a
/// second time.
///
/// When characters are missing from the input, the returned bytes are a
/// best effort: the tail of the output may come from the placeholder
/// rather than from the payload, with no marker distinguishing guessed
/// bytes from certain ones.
///
/// # Errors
///
/// - [`DecodeError::NotAscii`] - some element is outside the ASCII range;
///   no decode attempt is made.
/// - [`DecodeError::Base64`] - the payload failed both attempts; carries
///   the underlying [`Base64Error`] unchanged.
///
/// # Example
///
/// ```
/// use missing_base64::decode;
///
/// // Intact input decodes exactly.
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
///
/// // Truncated input still decodes; trailing bytes are a guess.
/// assert_eq!(decode("aGVsbG8gd29ybG").unwrap(), b"hello worl");
/// assert_eq!(decode("aGVsb").unwrap(), b"hell");
///
/// // Non-ASCII input is rejected outright.
/// assert!(decode(&[0xC8u8][..]).is_err());
/// ```
pub fn decode<'a>(input: impl Into<Base64Input<'a>>) -> Result<Vec<u8>, DecodeError> {
    let ascii = input.into().ascii_bytes()?;

    let mut payload: Vec<u8> = Vec::with_capacity(ascii.len() + 3);
    payload.extend(ascii.iter().copied().filter(|&byte| byte != PAD));
    payload.extend_from_slice(b"==");

    match decode_relaxed(&payload) {
        Ok(bytes) => Ok(bytes),
        Err(Base64Error::InvalidAlignment(_)) => {
            // One data character short of a full group: close it with a
            // zero sextet and try once more.
            let at = payload.len() - 2;
            payload.insert(at, PLACEHOLDER);
            Ok(decode_relaxed(&payload)?)
        }
        Err(err) => Err(err.into()),
    }
}
