// ABOUTME: Generic release struct parameterized by state marker.
// ABOUTME: State types carry version and host data for compile-time guarantees.

use serde::Serialize;

use crate::adapters::ReleaseNotes;
use crate::types::{ReleaseId, VersionId};

use super::channel::{ReleaseChannel, ReleaseSettings};
use super::state::{Completed, Drafted, HasVersion, Planned, Prepared, Pushed, Tagged, Verified};

/// A release in progress, parameterized by its current state.
///
/// Each stage consumes the release and returns it in the next state, so a
/// push cannot be attempted before a draft exists and a draft cannot be
/// created before the duplicate check ran.
#[derive(Debug)]
pub struct Release<S> {
    pub(crate) settings: ReleaseSettings,
    pub(crate) branch: String,
    pub(crate) state: S,
}

impl Release<Planned> {
    /// Start a release of `branch` with settings derived for its channel.
    pub fn new(settings: ReleaseSettings, branch: impl Into<String>) -> Self {
        Release {
            settings,
            branch: branch.into(),
            state: Planned,
        }
    }
}

impl<S> Release<S> {
    pub fn settings(&self) -> &ReleaseSettings {
        &self.settings
    }

    pub fn channel(&self) -> ReleaseChannel {
        self.settings.channel
    }

    /// The branch being released.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Host project receiving the draft.
    pub fn project(&self) -> &str {
        &self.settings.project
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<S: HasVersion> Release<S> {
    /// The authoritative version of this release.
    pub fn version(&self) -> &VersionId {
        self.state.version()
    }
}

impl Release<Prepared> {
    pub fn notes(&self) -> &ReleaseNotes {
        &self.state.notes
    }
}

impl Release<Tagged> {
    pub fn notes(&self) -> &ReleaseNotes {
        &self.state.notes
    }
}

impl Release<Verified> {
    pub fn notes(&self) -> &ReleaseNotes {
        &self.state.notes
    }
}

impl Release<Drafted> {
    /// Host id of the created draft.
    pub fn release_id(&self) -> ReleaseId {
        self.state.release_id
    }
}

impl Release<Pushed> {
    pub fn release_id(&self) -> ReleaseId {
        self.state.release_id
    }
}

impl Release<Completed> {
    /// Consume the finished release.
    pub fn finish(self) -> ReleaseReport {
        ReleaseReport {
            version: self.state.version,
            branch: self.branch,
            project: self.settings.project,
            release_id: self.state.release_id,
            prerelease: self.settings.prerelease,
        }
    }
}

/// What a completed release produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseReport {
    pub version: VersionId,
    pub branch: String,
    pub project: String,
    pub release_id: ReleaseId,
    pub prerelease: bool,
}
