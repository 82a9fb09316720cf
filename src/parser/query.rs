//! Query parameter splitting.

use super::str::split_once_ascii;

/// Iterator over `key=value` parameters of a `&`-delimited query.
///
/// The key and the value are separated by the first `=`, so values may
/// contain `=`. Parameters without `=` or with an empty value are skipped.
/// Neither keys nor values are decoded.
#[derive(Debug, Clone)]
pub(crate) struct Params<'a> {
    /// The rest of the query, `None` after the last parameter.
    rest: Option<&'a str>,
}

impl<'a> Params<'a> {
    /// Creates a new iterator over the parameters of the given query.
    #[inline]
    #[must_use]
    pub(crate) fn new(query: &'a str) -> Self {
        Self { rest: Some(query) }
    }
}

impl<'a> Iterator for Params<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;
            let param = match split_once_ascii(rest, b'&') {
                Some((param, rest)) => {
                    self.rest = Some(rest);
                    param
                }
                None => {
                    self.rest = None;
                    rest
                }
            };
            match split_once_ascii(param, b'=') {
                Some((key, value)) if !value.is_empty() => return Some((key, value)),
                _ => trace_event!(param, "skipping magnet URI parameter without value"),
            }
        }
    }
}

impl core::iter::FusedIterator for Params<'_> {}
