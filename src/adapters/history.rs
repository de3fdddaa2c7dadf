// ABOUTME: Fallback notes generator built from git commit subjects.
// ABOUTME: Lists changes since the most recent tag, skipping bump commits.

use async_trait::async_trait;

use super::git::SystemGit;
use super::traits::{NotesError, NotesGenerator, ReleaseNotes};
use crate::release::is_bump_commit;
use crate::types::VersionId;

/// Release notes from `git log` since the last tag.
#[derive(Debug, Clone)]
pub struct GitLogNotesGenerator {
    git: SystemGit,
}

impl GitLogNotesGenerator {
    pub fn new(git: SystemGit) -> Self {
        Self { git }
    }
}

/// Render commit subjects as a bullet list, dropping bump commits.
pub(crate) fn render_subjects(subjects: &[String]) -> String {
    subjects
        .iter()
        .filter(|subject| !is_bump_commit(subject))
        .map(|subject| format!("- {subject}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl NotesGenerator for GitLogNotesGenerator {
    async fn generate(
        &self,
        branch: &str,
        version: &VersionId,
    ) -> Result<ReleaseNotes, NotesError> {
        let since = self
            .git
            .latest_tag()
            .await
            .map_err(|e| NotesError::History(e.to_string()))?;
        let subjects = self
            .git
            .subjects_since(since.as_deref())
            .await
            .map_err(|e| NotesError::History(e.to_string()))?;

        tracing::debug!(
            "Collected {} commit(s) on {} since {:?} for {}",
            subjects.len(),
            branch,
            since,
            version
        );

        let text = render_subjects(&subjects);
        if text.is_empty() {
            let since = since.unwrap_or_else(|| "the start of history".to_string());
            return Ok(ReleaseNotes::new(text).with_warning(format!(
                "no commits found since {since}; release notes are empty"
            )));
        }

        Ok(ReleaseNotes::new(text))
    }
}
