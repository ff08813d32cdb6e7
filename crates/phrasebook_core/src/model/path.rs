//! Relative phrase path normalization.
//!
//! # Responsibility
//! - Normalize raw caller input into the canonical relative form.
//! - Reject input that cannot address an entry under a dictionary root.
//!
//! # Invariants
//! - Exactly one leading separator is stripped, never more.
//! - A constructed path is non-empty, not whitespace-only, and never starts
//!   with a separator.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Segment separator used by phrase paths.
pub const PATH_SEPARATOR: char = '/';

/// Errors from relative path normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativePathError {
    /// Input is empty or whitespace-only after stripping the separator.
    Empty,
    /// Input still starts with a separator after stripping one.
    LeadingSeparator,
}

impl Display for RelativePathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "relative path is empty after normalization"),
            Self::LeadingSeparator => {
                write!(f, "relative path keeps a leading separator after normalization")
            }
        }
    }
}

impl Error for RelativePathError {}

/// Normalized slash-separated key addressing one phrase entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct RelativePath(String);

impl RelativePath {
    /// Normalizes one raw path.
    ///
    /// # Errors
    /// - `Empty` when the remainder is empty or whitespace-only.
    /// - `LeadingSeparator` when the remainder still starts with `/`.
    pub fn parse(raw: &str) -> Result<Self, RelativePathError> {
        let stripped = raw.strip_prefix(PATH_SEPARATOR).unwrap_or(raw);
        if stripped.trim().is_empty() {
            return Err(RelativePathError::Empty);
        }
        if stripped.starts_with(PATH_SEPARATOR) {
            return Err(RelativePathError::LeadingSeparator);
        }
        Ok(Self(stripped.to_string()))
    }

    /// Returns the normalized path text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Iterates path segments in root-to-leaf order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }
}

impl Display for RelativePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for RelativePath {
    type Error = RelativePathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}
