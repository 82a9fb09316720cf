//! Magnet URI record.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::{Error, LengthError};
use crate::key::Key;

mod encode;
mod parse;

/// A parsed magnet URI.
///
/// A value is created by [`Magnet::parse`] (or built up from
/// [`Magnet::new`]), optionally sorted in place by [`Magnet::normalize`], and
/// rendered by [`Magnet::encode`].
///
/// # Field semantics
///
/// * Exact topics, trackers and acceptable sources are sets: they never hold
///   the same value twice. Until [`normalize`][`Self::normalize`] is called
///   they are kept in the order they were first seen.
/// * Exact sources and keyword topics are sequences and may hold duplicates.
/// * Any other parameter lands in [`extra`][`Self::extra`], keyed by its name.
///
/// Note that `==` compares the field contents in their current order, so
/// two magnets with the same set of trackers in a different order are equal
/// only after both are normalized.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Magnet {
    /// Exact topics (`xt`), raw.
    exact_topics: Vec<String>,
    /// Display name (`dn`), decoded.
    display_name: Option<String>,
    /// Exact length (`xl`) in bytes. Zero means absent.
    exact_length: u64,
    /// Trackers (`tr`), decoded.
    trackers: Vec<String>,
    /// Acceptable sources (`as`), decoded.
    acceptable_sources: Vec<String>,
    /// Exact sources (`xs`), decoded.
    exact_sources: Vec<String>,
    /// Keyword topics (`kt`), raw.
    keyword_topics: Vec<String>,
    /// Manifest topic (`mt`), raw.
    manifest_topic: Option<String>,
    /// Unrecognized parameters, decoded.
    extra: BTreeMap<String, Vec<String>>,
}

impl Magnet {
    /// The largest exact length (`xl`) accepted by the parser and the setter.
    pub const MAX_EXACT_LENGTH: u64 = i64::MAX as u64;

    /// Creates an empty magnet.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a magnet URI.
    ///
    /// The input must start with `magnet:?`. The rest is split into
    /// `&`-delimited `key=value` parameters, where only the first `=`
    /// separates the key from the value. Parameters without `=` or with an
    /// empty value are ignored.
    ///
    /// Parsing is all-or-nothing: the first invalid parameter fails the whole
    /// parse.
    ///
    /// # Failures
    ///
    /// * [`ErrorKind::MissingPrefix`][`crate::ErrorKind::MissingPrefix`] if
    ///   the input does not start with `magnet:?`.
    /// * [`ErrorKind::InvalidEncoding`][`crate::ErrorKind::InvalidEncoding`]
    ///   if a value that should be percent-encoded has a broken escape or does
    ///   not decode to UTF-8.
    /// * [`ErrorKind::InvalidLength`][`crate::ErrorKind::InvalidLength`] if
    ///   `xl` is not a non-negative integer fitting in `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::Magnet;
    ///
    /// let magnet = Magnet::parse("magnet:?xt=urn:btih:ABCD&xt=urn:btih:ABCD&kt=foo+bar+baz")?;
    /// assert_eq!(magnet.exact_topics(), ["urn:btih:ABCD"]);
    /// assert_eq!(magnet.keyword_topics(), ["foo", "bar", "baz"]);
    /// # Ok::<_, magnet_uri::Error>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self, Error> {
        parse::parse(raw)
    }

    /// Sorts every multi-valued field in ascending byte order.
    ///
    /// This covers exact topics, trackers, acceptable sources, exact sources,
    /// keyword topics and the values of each extra parameter. Scalar fields
    /// and the key order of extra parameters are not affected.
    ///
    /// Normalizing an already normalized magnet changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::Magnet;
    ///
    /// let mut magnet = Magnet::parse("magnet:?tr=udp%3A%2F%2Fb&tr=udp%3A%2F%2Fa&kt=z+y")?;
    /// magnet.normalize();
    /// assert_eq!(magnet.trackers(), ["udp://a", "udp://b"]);
    /// assert_eq!(magnet.keyword_topics(), ["y", "z"]);
    /// # Ok::<_, magnet_uri::Error>(())
    /// ```
    pub fn normalize(&mut self) {
        self.exact_topics.sort_unstable();
        self.trackers.sort_unstable();
        self.acceptable_sources.sort_unstable();
        self.exact_sources.sort_unstable();
        self.keyword_topics.sort_unstable();
        for values in self.extra.values_mut() {
            values.sort_unstable();
        }
    }

    /// Encodes the magnet into a URI string.
    ///
    /// This is the same string as the [`Display`][`core::fmt::Display`]
    /// output. Parameters are emitted in a fixed order: `dn` (always, even
    /// when empty), `xt`, `xl` (only when non-zero), `tr`, `as`, `xs`, `kt`,
    /// `mt`, then the extra parameters sorted by key.
    ///
    /// Extra parameter values are decoded on parse but emitted verbatim. A
    /// decoded value containing `&`, `=` or `#` therefore changes the
    /// structure of the output: `x.a=%26tr%3Dudp%3A%2F%2Fe` parses to the
    /// extra value `&tr=udp://e`, which encodes back as an extra parameter
    /// followed by a tracker. Inspect [`extra`][`Self::extra`] before
    /// re-encoding a magnet from an untrusted source.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::Magnet;
    ///
    /// let mut magnet = Magnet::new();
    /// magnet.insert_exact_topic("urn:btih:ABCD");
    /// magnet.set_exact_length(100)?;
    /// magnet.set_display_name(Some("My File".into()));
    /// assert_eq!(magnet.encode(), "magnet:?dn=My+File&xt=urn:btih:ABCD&xl=100");
    /// # Ok::<_, magnet_uri::Error>(())
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Returns the exact topics (`xt`).
    #[inline]
    #[must_use]
    pub fn exact_topics(&self) -> &[String] {
        &self.exact_topics
    }

    /// Adds an exact topic (`xt`).
    ///
    /// The topic is emitted verbatim by the encoder, so it should not contain
    /// `&` or `#`. Returns `false` if the topic was already present.
    pub fn insert_exact_topic<T: Into<String>>(&mut self, topic: T) -> bool {
        insert_unique(&mut self.exact_topics, topic.into())
    }

    /// Returns the display name (`dn`).
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Sets the display name (`dn`).
    #[inline]
    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    /// Returns the exact length (`xl`) in bytes, zero if unknown.
    #[inline]
    #[must_use]
    pub fn exact_length(&self) -> u64 {
        self.exact_length
    }

    /// Sets the exact length (`xl`) in bytes.
    ///
    /// Zero means unknown and is not emitted by the encoder.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidLength`][`crate::ErrorKind::InvalidLength`]
    /// and leaves the magnet unchanged if `length` exceeds
    /// [`MAX_EXACT_LENGTH`][`Self::MAX_EXACT_LENGTH`], so that every encoded
    /// magnet parses back.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::{ErrorKind, Magnet};
    ///
    /// let mut magnet = Magnet::new();
    /// magnet.set_exact_length(Magnet::MAX_EXACT_LENGTH)?;
    /// assert_eq!(magnet.encode(), "magnet:?dn=&xl=9223372036854775807");
    ///
    /// let err = magnet.set_exact_length(u64::MAX).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidLength);
    /// assert_eq!(magnet.exact_length(), Magnet::MAX_EXACT_LENGTH);
    /// # Ok::<_, magnet_uri::Error>(())
    /// ```
    pub fn set_exact_length(&mut self, length: u64) -> Result<(), Error> {
        if length > Self::MAX_EXACT_LENGTH {
            return Err(Error::invalid_length(LengthError::TooLarge));
        }
        self.exact_length = length;
        Ok(())
    }

    /// Returns the tracker URLs (`tr`).
    #[inline]
    #[must_use]
    pub fn trackers(&self) -> &[String] {
        &self.trackers
    }

    /// Adds a tracker URL (`tr`).
    ///
    /// Returns `false` if the tracker was already present.
    pub fn insert_tracker<T: Into<String>>(&mut self, tracker: T) -> bool {
        insert_unique(&mut self.trackers, tracker.into())
    }

    /// Returns the acceptable sources (`as`).
    #[inline]
    #[must_use]
    pub fn acceptable_sources(&self) -> &[String] {
        &self.acceptable_sources
    }

    /// Adds an acceptable source (`as`).
    ///
    /// Returns `false` if the source was already present.
    pub fn insert_acceptable_source<T: Into<String>>(&mut self, source: T) -> bool {
        insert_unique(&mut self.acceptable_sources, source.into())
    }

    /// Returns the exact sources (`xs`), in order and with duplicates.
    #[inline]
    #[must_use]
    pub fn exact_sources(&self) -> &[String] {
        &self.exact_sources
    }

    /// Appends an exact source (`xs`).
    #[inline]
    pub fn push_exact_source<T: Into<String>>(&mut self, source: T) {
        self.exact_sources.push(source.into());
    }

    /// Returns the keyword topics (`kt`).
    #[inline]
    #[must_use]
    pub fn keyword_topics(&self) -> &[String] {
        &self.keyword_topics
    }

    /// Appends a keyword topic (`kt`).
    ///
    /// Keywords are emitted verbatim and joined with `+`, so a keyword should
    /// not contain `+`, `&` or `#`.
    #[inline]
    pub fn push_keyword_topic<T: Into<String>>(&mut self, keyword: T) {
        self.keyword_topics.push(keyword.into());
    }

    /// Returns the manifest topic (`mt`).
    #[inline]
    #[must_use]
    pub fn manifest_topic(&self) -> Option<&str> {
        self.manifest_topic.as_deref()
    }

    /// Sets the manifest topic (`mt`).
    ///
    /// The value is emitted verbatim. An empty value is not emitted at all.
    #[inline]
    pub fn set_manifest_topic(&mut self, topic: Option<String>) {
        self.manifest_topic = topic;
    }

    /// Returns the unrecognized parameters, keyed by name.
    ///
    /// Each key maps to its values in the order they were added.
    #[inline]
    #[must_use]
    pub fn extra(&self) -> &BTreeMap<String, Vec<String>> {
        &self.extra
    }

    /// Returns the values of the given unrecognized parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::Magnet;
    ///
    /// let magnet = Magnet::parse("magnet:?x.pe=10.0.0.1%3A6881&ws=http%3A%2F%2Fseed&x.pe=10.0.0.2%3A6881")?;
    /// assert_eq!(magnet.extra_values("x.pe"), ["10.0.0.1:6881", "10.0.0.2:6881"]);
    /// assert_eq!(magnet.extra_values("ws"), ["http://seed"]);
    /// assert!(magnet.extra_values("so").is_empty());
    /// # Ok::<_, magnet_uri::Error>(())
    /// ```
    #[must_use]
    pub fn extra_values(&self, key: &str) -> &[String] {
        self.extra.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// Appends a value of an unrecognized parameter.
    ///
    /// The key and the value are emitted verbatim, so neither should contain
    /// `&`, `=` or `#`: the encoder would write them as parameter delimiters
    /// (see [`encode`][`Self::encode`]). Returns `false` and adds nothing if
    /// `key` is one of the recognized keys (see [`Key`]).
    pub fn push_extra<K, V>(&mut self, key: K, value: V) -> bool
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        if Key::from_name(&key).is_some() {
            return false;
        }
        self.extra.entry(key).or_default().push(value.into());
        true
    }
}

/// Pushes the value unless an equal value is already present.
fn insert_unique(values: &mut Vec<String>, value: String) -> bool {
    if values.contains(&value) {
        return false;
    }
    values.push(value);
    true
}

impl core::str::FromStr for Magnet {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Magnet {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use super::Magnet;

    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for Magnet {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    /// Magnet URI string visitor.
    #[derive(Debug, Clone, Copy)]
    struct MagnetVisitor;

    impl<'de> Visitor<'de> for MagnetVisitor {
        type Value = Magnet;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a magnet URI string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Magnet::parse(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Magnet {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(MagnetVisitor)
        }
    }
}
