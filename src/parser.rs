//! Building blocks for the magnet URI parser.

pub(crate) mod char;
pub(crate) mod pct;
pub(crate) mod query;
mod str;
