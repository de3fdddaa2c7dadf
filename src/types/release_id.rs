// ABOUTME: Identifier assigned by the release host to a release record.
// ABOUTME: Kept distinct from version identifiers so the two cannot be swapped.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use = "release ids reference host records and should not be ignored"]
pub struct ReleaseId(u64);

impl ReleaseId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
