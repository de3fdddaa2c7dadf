// ABOUTME: Guards that stop a release before it duplicates earlier work.
// ABOUTME: Detects prior bump commits and existing drafts for the same version.

use std::sync::LazyLock;

use regex::Regex;

use crate::adapters::ReleaseSummary;
use crate::types::VersionId;

static BUMP_COMMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Bump v[0-9.]*(-beta[0-9.]*)?(-nightly[0-9.]*)?$")
        .expect("bump commit pattern is valid")
});

/// Whether a commit subject is a version bump commit, e.g. `Bump v2.0.0-beta.1`.
///
/// Surrounding whitespace and one pair of single quotes are ignored, since
/// some log formats wrap the subject in quotes.
pub fn is_bump_commit(subject: &str) -> bool {
    let subject = subject.trim();
    let subject = subject
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(subject);
    BUMP_COMMIT.is_match(subject)
}

/// The first existing draft release already tagged with `version`.
pub fn find_duplicate_draft<'a>(
    releases: &'a [ReleaseSummary],
    version: &VersionId,
) -> Option<&'a ReleaseSummary> {
    releases
        .iter()
        .find(|release| release.draft && release.tag_name == version.as_str())
}
