// ABOUTME: Blocking operator confirmation trait.
// ABOUTME: Gates a release on a yes/no answer for the candidate version.

use crate::types::VersionId;

/// Asks whether to go ahead with releasing `version`.
pub trait Confirmer: Send + Sync {
    /// Blocks until an answer is available. `Ok(false)` declines.
    fn confirm(&self, version: &VersionId) -> std::io::Result<bool>;
}
