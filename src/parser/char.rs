//! Helpers for characters.

/// Checks if the given byte matches `unreserved` rule of RFC 3986.
///
/// ```text
/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
/// ```
#[inline]
#[must_use]
pub(crate) fn is_ascii_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Returns the value of the given hexadecimal digit.
#[inline]
#[must_use]
fn hexdigit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - (b'A' - 10)),
        b'a'..=b'f' => Some(b - (b'a' - 10)),
        _ => None,
    }
}

/// Converts the two hexadecimal digits of a percent-encoding triplet into a byte.
///
/// Both uppercase and lowercase digits are accepted.
#[must_use]
pub(crate) fn hexdigits_to_byte([upper, lower]: [u8; 2]) -> Option<u8> {
    let upper = hexdigit_value(upper)?;
    let lower = hexdigit_value(lower)?;
    Some((upper << 4) | lower)
}
