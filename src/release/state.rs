// ABOUTME: Release state types for the type state pattern.
// ABOUTME: Later states carry the version, notes and host id they were reached with.

use crate::adapters::ReleaseNotes;
use crate::types::{ReleaseId, VersionId};

/// Initial state: branch resolved, change guard passed.
/// Available actions: `confirm()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Planned;

/// Confirmed: the operator approved the previewed version.
/// Available actions: `prepare()`
#[derive(Debug, Clone)]
pub struct Confirmed {
    pub(crate) candidate: VersionId,
}

impl Confirmed {
    pub fn candidate(&self) -> &VersionId {
        &self.candidate
    }
}

/// Prepared: authoritative version resolved and notes generated.
/// Available actions: `tag()`
#[derive(Debug, Clone)]
pub struct Prepared {
    pub(crate) version: VersionId,
    pub(crate) notes: ReleaseNotes,
}

/// Tagged: annotated tag created locally.
/// Available actions: `check_for_draft()`
#[derive(Debug, Clone)]
pub struct Tagged {
    pub(crate) version: VersionId,
    pub(crate) notes: ReleaseNotes,
}

/// Verified: no draft exists on the host for this version.
/// Available actions: `create_draft()`
#[derive(Debug, Clone)]
pub struct Verified {
    pub(crate) version: VersionId,
    pub(crate) notes: ReleaseNotes,
}

/// Drafted: draft release created on the host.
/// Available actions: `push()`
#[derive(Debug, Clone)]
pub struct Drafted {
    pub(crate) version: VersionId,
    pub(crate) release_id: ReleaseId,
}

/// Pushed: branch and tag pushed to the remote.
/// Available actions: `trigger_builds()`
#[derive(Debug, Clone)]
pub struct Pushed {
    pub(crate) version: VersionId,
    pub(crate) release_id: ReleaseId,
}

/// Completed: builds triggered.
/// Available actions: `finish()`
#[derive(Debug, Clone)]
pub struct Completed {
    pub(crate) version: VersionId,
    pub(crate) release_id: ReleaseId,
}

/// States that know the authoritative version.
pub trait HasVersion {
    fn version(&self) -> &VersionId;
}

macro_rules! impl_has_version {
    ($($state:ty),*) => {
        $(impl HasVersion for $state {
            fn version(&self) -> &VersionId {
                &self.version
            }
        })*
    };
}

impl_has_version!(Prepared, Tagged, Verified, Drafted, Pushed, Completed);
