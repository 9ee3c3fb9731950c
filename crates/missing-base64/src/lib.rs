//! Base64 decoding that tolerates missing characters.
//!
//! Standard decoders reject input whose length stopped being a multiple of
//! four or whose padding is gone. This crate decodes as much of the payload
//! as the remaining characters allow: padding bytes may sit anywhere (they
//! are stripped up front), a truncated final group is decoded from whatever
//! is left of it, and a payload cut one character into an encoded group is
//! closed with a placeholder sextet. Bytes decoded past the truncation
//! point are manufactured, not recovered - callers that need the exact
//! original data must supply complete input.
//!
//! # Example
//!
//! ```
//! use missing_base64::{decode, from_base64};
//!
//! // Complete input round-trips exactly.
//! assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
//!
//! // Missing padding is fine, and so are missing characters.
//! assert_eq!(from_base64("aGVsbG8").unwrap(), b"hello");
//! assert_eq!(from_base64("aGVsbG").unwrap(), b"hell");
//!
//! // Byte input goes through the same ASCII gate as text input.
//! assert_eq!(decode(b"aGVsbG8=").unwrap(), b"hello");
//! ```

use thiserror::Error;

mod constants;
mod decode;
mod decode_relaxed;
mod from_base64;
mod from_base64_bin;
mod input;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PLACEHOLDER};
pub use decode::decode;
pub use decode_relaxed::decode_relaxed;
pub use from_base64::from_base64;
pub use from_base64_bin::from_base64_bin;
pub use input::Base64Input;

/// Error type for the tolerant decoding entry points.
///
/// Callers have exactly two failure categories to handle: input that is not
/// ASCII at all, and payloads the quad decoder could not make sense of even
/// after recovery. The second category carries the [`Base64Error`] value
/// through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not representable as single-byte ASCII text.
    #[error("input is neither ASCII bytes nor an ASCII string")]
    NotAscii,
    /// The payload failed to decode; the underlying error is passed through.
    #[error(transparent)]
    Base64(#[from] Base64Error),
}

/// Error type of the relaxed quad decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The data-character count is one more than a multiple of four; a lone
    /// sextet cannot form a byte. Carries the data-character count.
    #[error("number of data characters ({0}) cannot be 1 more than a multiple of 4")]
    InvalidAlignment(usize),
    /// The final group was still open when the input ended: two or three
    /// data characters arrived without enough padding to close them.
    #[error("incorrect padding")]
    IncorrectPadding,
}
