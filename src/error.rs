//! Error types for the rich-text engine.

use std::fmt;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for engine operations.
#[derive(Debug)]
pub enum Error {
    /// A tag names a style kind the registry does not know.
    UnknownStyleTag(String),
    /// Invalid color format in a `TextColor` tag (e.g., malformed hex string).
    InvalidColor(String),
    /// The tag names a known kind but its parameter cannot be decoded.
    InvalidStyleParameter { tag: String },
    /// Snapshot (de)serialization failure.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStyleTag(tag) => write!(f, "unknown style tag: {tag:?}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidStyleParameter { tag } => {
                write!(f, "invalid style parameter in tag {tag:?}")
            }
            Self::Json(e) => write!(f, "snapshot serialization error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
