//! Error types for civil time normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing civil input or resolving a timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Civil date/time fields did not parse or are out of calendar range.
    MalformedInput(String),
    /// A named timezone did not resolve in the IANA database.
    UnknownTimezone(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(msg) => write!(f, "malformed civil input: {msg}"),
            Self::UnknownTimezone(name) => write!(f, "unknown timezone: {name}"),
        }
    }
}

impl Error for TimeError {}
