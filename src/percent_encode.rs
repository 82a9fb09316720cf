//! Percent encoding.

use core::fmt::{self, Write as _};

use crate::parser::char::is_ascii_unreserved;

/// A proxy to percent-encode a string as a query parameter value.
///
/// ASCII alphanumerics and `-`, `.`, `_`, `~` are written as is, a space is
/// written as `+`, and every other character is written as the
/// percent-encoding triplets of its UTF-8 bytes, with uppercase hexadecimal
/// digits. This is the escaping applied to the `dn`, `tr`, `as` and `xs`
/// values of an encoded [`Magnet`][`crate::Magnet`].
///
/// The encoding happens while formatting, so nothing is allocated unless the
/// result is collected into a string.
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<T> {
    /// Raw string before being encoded.
    raw: T,
}

impl<T: fmt::Display> PercentEncoded<T> {
    /// Creates an encoded string from a raw query parameter value.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::percent_encode::PercentEncoded;
    ///
    /// let raw = "udp://tracker.example:6969/ann?key=a b";
    /// let encoded = "udp%3A%2F%2Ftracker.example%3A6969%2Fann%3Fkey%3Da+b";
    /// assert_eq!(PercentEncoded::from_query_value(raw).to_string(), encoded);
    /// ```
    #[inline]
    pub fn from_query_value(raw: T) -> Self {
        Self { raw }
    }
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a character before written if necessary.
        struct Filter<'a, 'b> {
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                s.chars().try_for_each(|c| self.write_char(c))
            }
            fn write_char(&mut self, c: char) -> fmt::Result {
                if c.is_ascii() && is_ascii_unreserved(c as u8) {
                    self.writer.write_char(c)
                } else if c == ' ' {
                    self.writer.write_char('+')
                } else {
                    write_pct_encoded_char(&mut self.writer, c)
                }
            }
        }
        let mut filter = Filter { writer: f };
        write!(filter, "{}", self.raw)
    }
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes().try_for_each(|b| write!(writer, "%{:02X}", b))
}
