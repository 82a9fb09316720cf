//! Percent decoding of query parameter values.

use core::fmt;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use super::char::hexdigits_to_byte;
use super::str::contains_ascii2;

/// Percent decoding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeError {
    /// A `%` not followed by two hexadecimal digits.
    InvalidTriplet {
        /// Byte offset of the `%` in the encoded value.
        position: usize,
    },
    /// The decoded bytes are not a valid UTF-8 sequence.
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTriplet { position } => write!(
                f,
                "`%` at byte {} is not followed by two hexadecimal digits",
                position
            ),
            Self::InvalidUtf8 => f.write_str("decoded bytes are not valid UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

/// Decodes a percent-encoded query parameter value.
///
/// `+` is decoded to a space and `%XX` to the byte `XX`. The result must be a
/// valid UTF-8 string. Values without anything to decode are borrowed.
pub(crate) fn decode_query_value(s: &str) -> Result<Cow<'_, str>, DecodeError> {
    if !contains_ascii2(s, b'%', b'+') {
        return Ok(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' => {
                let byte = bytes
                    .get((i + 1)..(i + 3))
                    .and_then(|digits| hexdigits_to_byte([digits[0], digits[1]]))
                    .ok_or(DecodeError::InvalidTriplet { position: i })?;
                decoded.push(byte);
                i += 3;
            }
            _ => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded)
        .map(Cow::Owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}
