// ABOUTME: The draft release record submitted to the release host.
// ABOUTME: Serializes to the host's release creation payload.

use serde::Serialize;

use super::channel::ReleaseSettings;
use crate::types::VersionId;

/// A draft release for one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftRelease {
    pub tag_name: VersionId,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub target_commitish: String,
    #[serde(skip)]
    pub project: String,
}

impl DraftRelease {
    /// Build the draft for `version` released from `branch`.
    pub fn new(settings: &ReleaseSettings, version: &VersionId, notes: &str, branch: &str) -> Self {
        Self {
            tag_name: version.clone(),
            name: settings.release_name(version),
            body: settings.release_body(version, notes),
            draft: true,
            prerelease: settings.prerelease,
            target_commitish: settings.target_for(version, branch),
            project: settings.project.clone(),
        }
    }
}
