//! Parse error.

use core::fmt;
use core::num::ParseIntError;

use alloc::string::String;

use crate::parser::pct::DecodeError;

/// Magnet URI error.
///
/// Returned by [`parse`][`crate::parse`] and by
/// [`Magnet::set_exact_length`][`crate::Magnet::set_exact_length`].
/// Normalization and encoding of an existing [`Magnet`][`crate::Magnet`]
/// always succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

impl Error {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            ErrorRepr::MissingPrefix => ErrorKind::MissingPrefix,
            ErrorRepr::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            ErrorRepr::InvalidLength(_) => ErrorKind::InvalidLength,
        }
    }

    /// Returns the name of the parameter which could not be parsed.
    ///
    /// Returns `None` for [`ErrorKind::MissingPrefix`].
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::ErrorKind;
    ///
    /// let err = magnet_uri::parse("magnet:?x.pe=%zz").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
    /// assert_eq!(err.key(), Some("x.pe"));
    /// ```
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match &self.repr {
            ErrorRepr::MissingPrefix => None,
            ErrorRepr::InvalidEncoding { key, .. } => Some(key),
            ErrorRepr::InvalidLength(_) => Some("xl"),
        }
    }

    /// Creates an error for an input without the `magnet:?` prefix.
    #[inline]
    #[must_use]
    pub(crate) fn missing_prefix() -> Self {
        Self {
            repr: ErrorRepr::MissingPrefix,
        }
    }

    /// Creates an error for a value of `key` which could not be decoded.
    #[must_use]
    pub(crate) fn invalid_encoding(key: &str, error: DecodeError) -> Self {
        Self {
            repr: ErrorRepr::InvalidEncoding {
                key: key.into(),
                error,
            },
        }
    }

    /// Creates an error for a rejected exact length.
    #[inline]
    #[must_use]
    pub(crate) fn invalid_length(error: LengthError) -> Self {
        Self {
            repr: ErrorRepr::InvalidLength(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            ErrorRepr::MissingPrefix => f.write_str("magnet URI prefix `magnet:?` not found"),
            ErrorRepr::InvalidEncoding { key, error } => {
                write!(f, "invalid percent-encoding in `{}` parameter: {}", key, error)
            }
            ErrorRepr::InvalidLength(e) => write!(f, "invalid exact length: {}", e),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.repr {
            ErrorRepr::MissingPrefix => None,
            ErrorRepr::InvalidEncoding { error, .. } => Some(error),
            ErrorRepr::InvalidLength(LengthError::Syntax(e)) => Some(e),
            ErrorRepr::InvalidLength(LengthError::Negative | LengthError::TooLarge) => None,
        }
    }
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorRepr {
    /// The input does not start with `magnet:?`.
    MissingPrefix,
    /// A value could not be percent-decoded.
    InvalidEncoding {
        /// Parameter name.
        key: String,
        /// Decoder error.
        error: DecodeError,
    },
    /// The `xl` value is not a valid length.
    InvalidLength(LengthError),
}

/// Reason an `xl` value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LengthError {
    /// Not a base-10 integer, or out of the 64-bit signed range.
    Syntax(ParseIntError),
    /// A negative integer.
    Negative,
    /// A length above `i64::MAX`.
    TooLarge,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => e.fmt(f),
            Self::Negative => f.write_str("length must not be negative"),
            Self::TooLarge => f.write_str("length must not exceed 9223372036854775807"),
        }
    }
}

/// Parse error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not start with `magnet:?`.
    MissingPrefix,
    /// Percent-decoding failed on a field that requires it.
    InvalidEncoding,
    /// The `xl` value is not a non-negative base-10 integer within the 64-bit
    /// signed range.
    InvalidLength,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingPrefix => "missing prefix",
            Self::InvalidEncoding => "invalid encoding",
            Self::InvalidLength => "invalid length",
        })
    }
}
