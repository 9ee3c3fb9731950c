//! Relaxed base64 quad decoding function.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::Base64Error;

/// Reverse lookup table mapping a byte to its sextet value, or -1 for bytes
/// outside the standard alphabet.
static SEXTETS: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Decodes a base64 byte sequence under the relaxed discipline.
///
/// Relaxed means:
/// - Bytes outside the standard alphabet are skipped, not rejected.
/// - Padding may appear anywhere. A `=` seen while the current group holds
///   fewer than two data characters is ignored; once a group holds two or
///   three data characters and enough consecutive `=` arrive to fill it to
///   four, decoding ends successfully and everything after is ignored.
/// - Surplus bits left in a group closed by padding are dropped without a
///   canonicality check, so the last character of a shortened group may
///   carry bits that never reach the output.
///
/// The input must still account for every group: when the sequence ends
/// with a group left open, the call fails instead of returning the bytes
/// decoded so far.
///
/// # Errors
///
/// - [`Base64Error::InvalidAlignment`] - exactly one data character was
///   left over; six stray bits cannot form a byte. Carries the total
///   data-character count.
/// - [`Base64Error::IncorrectPadding`] - two or three data characters were
///   left over without enough padding to close the group.
///
/// # Example
///
/// ```
/// use missing_base64::{decode_relaxed, Base64Error};
///
/// // Canonical input decodes as usual.
/// assert_eq!(decode_relaxed(b"Zm9vYg==").unwrap(), b"foob");
///
/// // Bytes outside the alphabet are skipped.
/// assert_eq!(decode_relaxed(b"Zm9v\r\nYg==").unwrap(), b"foob");
///
/// // An open group is an error at this layer; the tolerant wrapper in
/// // [`decode`](crate::decode) is what supplies the missing padding.
/// assert_eq!(decode_relaxed(b"Zm9vYg"), Err(Base64Error::IncorrectPadding));
/// assert_eq!(
///     decode_relaxed(b"Zm9vY"),
///     Err(Base64Error::InvalidAlignment(5))
/// );
/// ```
pub fn decode_relaxed(view: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let mut out = Vec::with_capacity((view.len() >> 2) * 3 + 2);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    // Data characters in the current group (0..=3) and consecutive padding
    // characters counted against it.
    let mut group_len: usize = 0;
    let mut pads: usize = 0;
    let mut data_chars: usize = 0;

    for &byte in view {
        if byte == PAD {
            if group_len >= 2 {
                pads += 1;
                if group_len + pads >= 4 {
                    // The padding closes the final group; bits still in the
                    // accumulator are dropped, input after this is ignored.
                    return Ok(out);
                }
            }
            continue;
        }
        let sextet = SEXTETS[byte as usize];
        if sextet < 0 {
            continue;
        }
        pads = 0;
        data_chars += 1;
        group_len = (group_len + 1) & 3;
        acc = (acc << 6) | sextet as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }

    match bits {
        0 => Ok(out),
        6 => Err(Base64Error::InvalidAlignment(data_chars)),
        _ => Err(Base64Error::IncorrectPadding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(decode_relaxed(b"").unwrap(), b"");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(decode_relaxed(b"Zg==").unwrap(), b"f");
        assert_eq!(decode_relaxed(b"Zm8=").unwrap(), b"fo");
        assert_eq!(decode_relaxed(b"Zm9v").unwrap(), b"foo");
        assert_eq!(decode_relaxed(b"Zm9vYg==").unwrap(), b"foob");
        assert_eq!(decode_relaxed(b"Zm9vYmE=").unwrap(), b"fooba");
        assert_eq!(decode_relaxed(b"Zm9vYmFy").unwrap(), b"foobar");
    }

    #[test]
    fn test_skips_bytes_outside_alphabet() {
        assert_eq!(decode_relaxed(b"Zm!9v").unwrap(), b"foo");
        assert_eq!(decode_relaxed(b" Z\tm\n9\rv ").unwrap(), b"foo");
        assert_eq!(decode_relaxed(b"\x00Zm9v\x7f").unwrap(), b"foo");
    }

    #[test]
    fn test_padding_before_half_group_ignored() {
        assert_eq!(decode_relaxed(b"==Zm9v").unwrap(), b"foo");
        assert_eq!(decode_relaxed(b"Z=m9v").unwrap(), b"foo");
        assert_eq!(decode_relaxed(b"=").unwrap(), b"");
        assert_eq!(decode_relaxed(b"====").unwrap(), b"");
    }

    #[test]
    fn test_padding_closes_group_and_ends_input() {
        // Everything after the closing padding is ignored.
        assert_eq!(decode_relaxed(b"Zg==Zm9v").unwrap(), b"f");
        assert_eq!(decode_relaxed(b"Zm8=Zm9v").unwrap(), b"fo");
    }

    #[test]
    fn test_data_character_resets_padding_count() {
        // The stale '=' after "Zg" no longer counts toward closing the
        // group that fills up again later, so one trailing '=' is short.
        assert_eq!(
            decode_relaxed(b"Zg=AAAA=").unwrap_err(),
            Base64Error::IncorrectPadding
        );
        // Skipped garbage does not reset the count; the split pair closes.
        assert_eq!(decode_relaxed(b"Zg=!=").unwrap(), b"f");
    }

    #[test]
    fn test_surplus_bits_dropped_without_canonicality_check() {
        // 'g' and 'h' differ only in bits below the emitted byte.
        assert_eq!(decode_relaxed(b"Zg==").unwrap(), b"f");
        assert_eq!(decode_relaxed(b"Zh==").unwrap(), b"f");
    }

    #[test]
    fn test_one_leftover_character_is_alignment_error() {
        assert_eq!(
            decode_relaxed(b"Z").unwrap_err(),
            Base64Error::InvalidAlignment(1)
        );
        assert_eq!(
            decode_relaxed(b"Zm9vY").unwrap_err(),
            Base64Error::InvalidAlignment(5)
        );
        // Padding that never reaches a half-full group does not help.
        assert_eq!(
            decode_relaxed(b"Z===").unwrap_err(),
            Base64Error::InvalidAlignment(1)
        );
    }

    #[test]
    fn test_open_group_is_incorrect_padding() {
        assert_eq!(
            decode_relaxed(b"Zg").unwrap_err(),
            Base64Error::IncorrectPadding
        );
        assert_eq!(
            decode_relaxed(b"Zm8").unwrap_err(),
            Base64Error::IncorrectPadding
        );
        // One '=' is not enough to close a half-full group.
        assert_eq!(
            decode_relaxed(b"Zg=").unwrap_err(),
            Base64Error::IncorrectPadding
        );
    }

    #[test]
    fn test_no_partial_output_on_error() {
        // Three full groups decode before the failure; none of it leaks.
        assert_eq!(
            decode_relaxed(b"Zm9vYmFyZm9vY").unwrap_err(),
            Base64Error::InvalidAlignment(13)
        );
    }
}
