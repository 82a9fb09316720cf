//! Functions for common string operations.

/// Returns the position of the first occurrence of the given ASCII byte.
#[inline]
#[must_use]
pub(super) fn find_ascii(haystack: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii(), "[precondition] needle should be an ASCII byte");

    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().position(|b| b == needle)
    }
}

/// Returns true if the string contains either of the given ASCII bytes.
#[inline]
#[must_use]
pub(super) fn contains_ascii2(haystack: &str, needle1: u8, needle2: u8) -> bool {
    debug_assert!(
        needle1.is_ascii() && needle2.is_ascii(),
        "[precondition] needles should be ASCII bytes"
    );

    #[cfg(feature = "memchr")]
    {
        memchr::memchr2(needle1, needle2, haystack.as_bytes()).is_some()
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().any(|b| b == needle1 || b == needle2)
    }
}

/// Splits the string at the first occurrence of the given ASCII byte.
///
/// The delimiter itself is contained in neither of the returned strings.
#[must_use]
pub(super) fn split_once_ascii(s: &str, delim: u8) -> Option<(&str, &str)> {
    let pos = find_ascii(s, delim)?;
    // `delim` is ASCII, so `pos` and `pos + 1` are on char boundaries.
    Some((&s[..pos], &s[(pos + 1)..]))
}
