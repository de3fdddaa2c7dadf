// ABOUTME: Release notes generation trait and the notes record.
// ABOUTME: Notes carry text plus an optional warning for the operator.

use crate::types::VersionId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Release notes for one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// Embedded verbatim into the draft body.
    pub text: String,
    /// Advisory message for the operator. Never aborts a release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ReleaseNotes {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

/// Summarizes changes on a branch into release notes.
#[async_trait]
pub trait NotesGenerator: Send + Sync {
    async fn generate(&self, branch: &str, version: &VersionId)
    -> Result<ReleaseNotes, NotesError>;
}

/// Errors from notes generation.
#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("failed to run notes command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("notes command exited with {exit_code:?}: {stderr}")]
    CommandFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("failed to read commit history: {0}")]
    History(String),
}
