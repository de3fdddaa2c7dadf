// ABOUTME: Release channels and the settings derived from them once per run.
// ABOUTME: Keeps channel-specific branching out of the pipeline sequence.

use std::fmt;
use std::str::FromStr;

use crate::types::VersionId;

/// Placeholder notes for nightly builds, which carry no curated notes.
pub const NIGHTLY_NOTES: &str = "Nightlies do not get release notes, please compare tags for info";

/// The release track being cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseChannel {
    Stable,
    Beta,
    Nightly,
}

impl ReleaseChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "stable",
            ReleaseChannel::Beta => "beta",
            ReleaseChannel::Nightly => "nightly",
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown release channel '{0}' (expected stable, beta or nightly)")]
pub struct UnknownChannel(pub String);

impl FromStr for ReleaseChannel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(ReleaseChannel::Stable),
            "beta" => Ok(ReleaseChannel::Beta),
            "nightly" => Ok(ReleaseChannel::Nightly),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}

/// Where release notes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesPolicy {
    /// Ask the notes generator.
    Generate,
    /// Use [`NIGHTLY_NOTES`] without calling the generator.
    NightlyPlaceholder,
}

/// Explicit configuration handed to the orchestrator.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Token for the release host. Only required when a draft is created.
    pub host_token: Option<String>,
    /// Root of the repository being released.
    pub repo_root: std::path::PathBuf,
    /// Product name used in release titles and install instructions.
    pub product_name: String,
    /// Host project receiving the draft for this channel.
    pub host_project_name: String,
    /// Branch nightly drafts target regardless of the released branch.
    pub default_branch: String,
}

/// Channel behavior computed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSettings {
    pub channel: ReleaseChannel,
    pub product: String,
    pub project: String,
    pub prerelease: bool,
    pub notes: NotesPolicy,
    pub default_branch: String,
}

impl ReleaseSettings {
    pub fn new(channel: ReleaseChannel, is_beta: bool, config: &ReleaseConfig) -> Self {
        let notes = match channel {
            ReleaseChannel::Nightly => NotesPolicy::NightlyPlaceholder,
            ReleaseChannel::Stable | ReleaseChannel::Beta => NotesPolicy::Generate,
        };

        Self {
            channel,
            product: config.product_name.clone(),
            project: config.host_project_name.clone(),
            prerelease: is_beta,
            notes,
            default_branch: config.default_branch.clone(),
        }
    }

    /// Title of the draft release.
    pub fn release_name(&self, version: &VersionId) -> String {
        format!("{} {}", self.product, version)
    }

    /// Branch or commit the draft release points at.
    ///
    /// Nightly versions always target the default branch.
    pub fn target_for(&self, version: &VersionId, branch: &str) -> String {
        if version.is_nightly() {
            self.default_branch.clone()
        } else {
            branch.to_string()
        }
    }

    /// Body of the draft release.
    ///
    /// Prereleases get install guidance for their distribution tag ahead of
    /// the notes; stable releases get the notes unchanged.
    pub fn release_body(&self, version: &VersionId, notes: &str) -> String {
        if !self.prerelease {
            return notes.to_string();
        }

        let dist_tag = if version.is_nightly() {
            "nightly"
        } else {
            "beta"
        };

        format!(
            "Note: This is a {dist_tag} release.  Please file new issues for any bugs you find in it.\n \n \
             This release is published to npm under the {dist_tag} tag and can be installed via \
             npm install {product}@{dist_tag}, or npm i {product}@{bare}.\n \n {notes}",
            product = self.product,
            bare = version.without_prefix(),
        )
    }
}
