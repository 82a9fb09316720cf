//! Parser and serializer for [Magnet URIs][magnet].
//!
//! A magnet URI references content by hash and metadata rather than by
//! location. It looks like a bare query string:
//!
//! ```text
//! magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a&dn=Example+File&tr=udp%3A%2F%2Ftracker.example.com%3A6969
//! ```
//!
//! This crate does three things:
//!
//! * [`parse`] turns a raw string into a [`Magnet`].
//! * [`Magnet::normalize`] sorts every multi-valued field so that the
//!   serialized form does not depend on the input order.
//! * [`Magnet::encode`] (or the [`Display`][`core::fmt::Display`] impl)
//!   renders a [`Magnet`] back into a string.
//!
//! ```
//! use magnet_uri::Magnet;
//!
//! let mut magnet = Magnet::parse(
//!     "magnet:?xt=urn:btih:ABCD&tr=udp%3A%2F%2Fb.example&tr=udp%3A%2F%2Fa.example&dn=My%20File",
//! )?;
//! assert_eq!(magnet.display_name(), Some("My File"));
//! assert_eq!(magnet.exact_topics(), ["urn:btih:ABCD"]);
//!
//! magnet.normalize();
//! assert_eq!(
//!     magnet.encode(),
//!     "magnet:?dn=My+File&xt=urn:btih:ABCD&tr=udp%3A%2F%2Fa.example&tr=udp%3A%2F%2Fb.example"
//! );
//! # Ok::<_, magnet_uri::Error>(())
//! ```
//!
//! # Escaping rules
//!
//! Not every parameter is treated the same way. Values of `dn`, `tr`, `as`,
//! `xs` are percent-decoded on parse and percent-encoded on output, while
//! `xt`, `kt` and `mt` are stored and emitted exactly as they appear.
//! Unrecognized parameters are decoded on parse but emitted raw. See
//! [`Key::is_percent_encoded`] for the table.
//!
//! Parsing is not byte-for-byte reversible: duplicate exact topics, trackers
//! and acceptable sources are collapsed, parameter order is fixed by the
//! encoder, and empty parameters such as `dn=` are dropped.
//!
//! # Features
//!
//! * `std` (**enabled by default**):
//!     + Implements `std::error::Error` for the error types.
//!     + Without this feature, the crate is `no_std` but still requires `alloc`.
//! * `memchr`:
//!     + Uses the `memchr` crate to find parameter delimiters.
//! * `serde`:
//!     + Implements `Serialize` and `Deserialize` for [`Magnet`], using the
//!       encoded URI string as the serialized form.
//! * `tracing`:
//!     + Emits `tracing` events for skipped parameters and parse failures.
//!
//! [magnet]: https://en.wikipedia.org/wiki/Magnet_URI_scheme
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[macro_use]
mod trace;

pub mod error;
mod key;
mod magnet;
pub(crate) mod parser;
pub mod percent_encode;

pub use self::error::{Error, ErrorKind};
pub use self::key::Key;
pub use self::magnet::Magnet;

/// The fixed prefix every magnet URI starts with.
pub const PREFIX: &str = "magnet:?";

/// Parses a magnet URI.
///
/// This is a shorthand for [`Magnet::parse`].
///
/// # Examples
///
/// ```
/// use magnet_uri::ErrorKind;
///
/// let magnet = magnet_uri::parse("magnet:?dn=My%20File&xl=12345")?;
/// assert_eq!(magnet.display_name(), Some("My File"));
/// assert_eq!(magnet.exact_length(), 12345);
///
/// let err = magnet_uri::parse("http://example.com").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingPrefix);
/// # Ok::<_, magnet_uri::Error>(())
/// ```
#[inline]
pub fn parse(raw: &str) -> Result<Magnet, Error> {
    Magnet::parse(raw)
}
