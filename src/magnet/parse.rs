//! Magnet URI parser.

use alloc::borrow::Cow;
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, LengthError};
use crate::key::Key;
use crate::parser::pct::decode_query_value;
use crate::parser::query::Params;
use crate::PREFIX;

use super::Magnet;

/// Values with set semantics, kept in the order they were first seen.
#[derive(Debug, Default)]
struct UniqueValues<'a> {
    /// Values inserted so far.
    seen: BTreeSet<Cow<'a, str>>,
    /// Distinct values in insertion order.
    values: Vec<String>,
}

impl<'a> UniqueValues<'a> {
    /// Inserts the value unless it is already present.
    fn insert(&mut self, value: Cow<'a, str>) {
        if self.seen.insert(value.clone()) {
            self.values.push(value.into_owned());
        }
    }

    /// Returns the distinct values.
    #[inline]
    fn into_vec(self) -> Vec<String> {
        self.values
    }
}

/// Parses a magnet URI.
pub(super) fn parse(raw: &str) -> Result<Magnet, Error> {
    let result = parse_params(raw);
    #[cfg(feature = "tracing")]
    {
        if let Err(e) = &result {
            tracing::debug!(error = %e, "failed to parse magnet URI");
        }
    }
    result
}

/// Parses the parameters following the prefix.
fn parse_params(raw: &str) -> Result<Magnet, Error> {
    // Strip the prefix only once, so that later occurrences of `magnet:?` are
    // treated as a part of parameter values.
    let query = raw.strip_prefix(PREFIX).ok_or_else(Error::missing_prefix)?;

    let mut magnet = Magnet::new();
    let mut exact_topics = UniqueValues::default();
    let mut trackers = UniqueValues::default();
    let mut acceptable_sources = UniqueValues::default();

    for (name, value) in Params::new(query) {
        let key = match Key::from_name(name) {
            Some(key) => key,
            None => {
                let value = decode(name, value)?.into_owned();
                magnet.extra.entry(name.into()).or_default().push(value);
                continue;
            }
        };
        match key {
            Key::DisplayName => magnet.display_name = Some(decode(name, value)?.into_owned()),
            Key::ExactTopic => exact_topics.insert(Cow::Borrowed(value)),
            Key::ExactLength => magnet.exact_length = parse_length(value)?,
            Key::Tracker => trackers.insert(decode(name, value)?),
            Key::AcceptableSource => acceptable_sources.insert(decode(name, value)?),
            Key::ExactSource => magnet
                .exact_sources
                .push(decode(name, value)?.into_owned()),
            Key::KeywordTopic => magnet
                .keyword_topics
                .extend(value.split('+').map(String::from)),
            Key::ManifestTopic => magnet.manifest_topic = Some(value.into()),
        }
    }

    magnet.exact_topics = exact_topics.into_vec();
    magnet.trackers = trackers.into_vec();
    magnet.acceptable_sources = acceptable_sources.into_vec();
    Ok(magnet)
}

/// Percent-decodes the value of the parameter `name`.
#[inline]
fn decode<'a>(name: &str, value: &'a str) -> Result<Cow<'a, str>, Error> {
    decode_query_value(value).map_err(|e| Error::invalid_encoding(name, e))
}

/// Parses an `xl` value.
fn parse_length(value: &str) -> Result<u64, Error> {
    let length: i64 = value
        .parse()
        .map_err(|e| Error::invalid_length(LengthError::Syntax(e)))?;
    u64::try_from(length).map_err(|_| Error::invalid_length(LengthError::Negative))
}
