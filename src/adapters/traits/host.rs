// ABOUTME: Release host trait with SNAFU error type.
// ABOUTME: Lists releases of a project and creates draft releases.

use crate::release::DraftRelease;
use crate::types::ReleaseId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use snafu::Snafu;

/// A release record as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseSummary {
    pub id: ReleaseId,
    pub tag_name: String,
    pub draft: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The host's answer to a successful draft creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRelease {
    pub id: ReleaseId,
}

/// Remote release hosting: list and create.
#[async_trait]
pub trait ReleaseHost: Send + Sync {
    /// All releases of `project`, drafts included.
    async fn list_releases(&self, project: &str) -> Result<Vec<ReleaseSummary>, HostError>;

    /// Create the draft release in `project`.
    async fn create_draft(
        &self,
        project: &str,
        draft: &DraftRelease,
    ) -> Result<CreatedRelease, HostError>;
}

/// Errors talking to the release host.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum HostError {
    #[snafu(display("request to {url} failed: {source}"))]
    Transport { url: String, source: reqwest::Error },

    #[snafu(display("{url} returned {status}: {body}"))]
    Api {
        url: String,
        status: u16,
        body: String,
    },

    #[snafu(display("failed to decode response from {url}: {source}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl HostError {
    /// HTTP status reported by the host, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            HostError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
