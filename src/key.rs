//! Recognized parameter keys.

use core::fmt;

/// A parameter key with a dedicated field in [`Magnet`][`crate::Magnet`].
///
/// Keys not listed here (including `ws`, `so` and the `x.` extensions) are
/// kept in [`Magnet::extra`][`crate::Magnet::extra`].
///
/// Keys are matched case-sensitively: `DN` is an unrecognized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Key {
    /// `dn`: a filename to display to the user.
    DisplayName,
    /// `xt`: a content identifier, usually a hash URN.
    ExactTopic,
    /// `xl`: the payload size in bytes.
    ExactLength,
    /// `tr`: a tracker URL.
    Tracker,
    /// `as`: a direct download URL.
    AcceptableSource,
    /// `xs`: an alternate source URL.
    ExactSource,
    /// `kt`: `+`-separated search keywords.
    KeywordTopic,
    /// `mt`: a link to a metafile listing related content.
    ManifestTopic,
}

impl Key {
    /// All recognized keys, in the order the encoder emits them.
    pub const ALL: [Key; 8] = [
        Key::DisplayName,
        Key::ExactTopic,
        Key::ExactLength,
        Key::Tracker,
        Key::AcceptableSource,
        Key::ExactSource,
        Key::KeywordTopic,
        Key::ManifestTopic,
    ];

    /// Looks up the key with the given parameter name.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::Key;
    ///
    /// assert_eq!(Key::from_name("tr"), Some(Key::Tracker));
    /// assert_eq!(Key::from_name("x.pe"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "dn" => Self::DisplayName,
            "xt" => Self::ExactTopic,
            "xl" => Self::ExactLength,
            "tr" => Self::Tracker,
            "as" => Self::AcceptableSource,
            "xs" => Self::ExactSource,
            "kt" => Self::KeywordTopic,
            "mt" => Self::ManifestTopic,
            _ => return None,
        };
        Some(key)
    }

    /// Returns the parameter name as it appears in a URI.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DisplayName => "dn",
            Self::ExactTopic => "xt",
            Self::ExactLength => "xl",
            Self::Tracker => "tr",
            Self::AcceptableSource => "as",
            Self::ExactSource => "xs",
            Self::KeywordTopic => "kt",
            Self::ManifestTopic => "mt",
        }
    }

    /// Returns true if values of this key are percent-encoded in a URI.
    ///
    /// Such values are decoded by the parser and encoded again by the encoder.
    /// Values of the other keys are stored and emitted verbatim.
    ///
    /// | Key  | Percent-encoded |
    /// |------|-----------------|
    /// | `dn` | yes             |
    /// | `xt` | no              |
    /// | `xl` | no (digits)     |
    /// | `tr` | yes             |
    /// | `as` | yes             |
    /// | `xs` | yes             |
    /// | `kt` | no              |
    /// | `mt` | no              |
    #[inline]
    #[must_use]
    pub fn is_percent_encoded(self) -> bool {
        matches!(
            self,
            Self::DisplayName | Self::Tracker | Self::AcceptableSource | Self::ExactSource
        )
    }
}

impl fmt::Display for Key {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
