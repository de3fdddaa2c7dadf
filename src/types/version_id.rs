// ABOUTME: Validated version identifier used as tag name and release key.
// ABOUTME: Rejects empty or whitespace-containing values; ordered lexicographically.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionIdError {
    #[error("version identifier cannot be empty")]
    Empty,

    #[error("version identifier cannot contain whitespace: '{0}'")]
    ContainsWhitespace(String),
}

/// A version identifier such as `v2.0.0-beta.1`.
///
/// Produced by a version resolver and never modified afterwards. The same
/// value names the annotated tag and keys the draft release on the host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionId(String);

impl VersionId {
    pub fn new(value: &str) -> Result<Self, VersionIdError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(VersionIdError::Empty);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(VersionIdError::ContainsWhitespace(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this version names a nightly build.
    pub fn is_nightly(&self) -> bool {
        self.0.contains("nightly")
    }

    /// The version without its leading `v` marker, as package registries expect.
    pub fn without_prefix(&self) -> &str {
        self.0.strip_prefix('v').unwrap_or(&self.0)
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for VersionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VersionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        VersionId::new(&s).map_err(serde::de::Error::custom)
    }
}
