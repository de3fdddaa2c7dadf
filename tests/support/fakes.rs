// ABOUTME: In-memory collaborators that record every call in a shared journal.
// ABOUTME: Lets pipeline tests assert on call order and on what reached each side.

use async_trait::async_trait;
use cutter::adapters::{
    BuildTrigger, CommandOutput, Confirmer, CreatedRelease, HostError, NotesError,
    NotesGenerator, ReleaseHost, ReleaseNotes, ReleaseSummary, ScmError, SourceControl,
    TriggerError, TriggerOptions, VersionError, VersionResolver,
};
use cutter::release::{DraftRelease, ReleaseChannel, ReleaseConfig};
use cutter::types::{ReleaseId, VersionId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Ordered log of calls shared by all fakes of one test.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    /// Entries whose first word is `name`.
    pub fn calls(&self, name: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.split_whitespace().next() == Some(name))
            .collect()
    }
}

pub fn version(v: &str) -> VersionId {
    VersionId::new(v).unwrap()
}

fn output(exit_code: i32, stderr: &str) -> CommandOutput {
    CommandOutput {
        exit_code: Some(exit_code),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

pub fn release_config(project: &str) -> ReleaseConfig {
    ReleaseConfig {
        host_token: Some("test-token".to_string()),
        repo_root: ".".into(),
        product_name: "electron".to_string(),
        host_project_name: project.to_string(),
        default_branch: "master".to_string(),
    }
}

// =============================================================================
// VersionResolver
// =============================================================================

pub struct FakeVersion {
    journal: Journal,
    preview: VersionId,
    actual: VersionId,
    fail_with: Option<String>,
}

impl FakeVersion {
    pub fn new(journal: &Journal, v: &str) -> Self {
        Self {
            journal: journal.clone(),
            preview: version(v),
            actual: version(v),
            fail_with: None,
        }
    }

    /// Resolve a different version once preview is off.
    pub fn bumping_to(mut self, v: &str) -> Self {
        self.actual = version(v);
        self
    }

    pub fn failing(mut self, stderr: &str) -> Self {
        self.fail_with = Some(stderr.to_string());
        self
    }
}

#[async_trait]
impl VersionResolver for FakeVersion {
    async fn resolve(
        &self,
        channel: ReleaseChannel,
        preview: bool,
    ) -> Result<VersionId, VersionError> {
        self.journal.record(format!(
            "version {channel}{}",
            if preview { " preview" } else { "" }
        ));
        if let Some(stderr) = &self.fail_with {
            return Err(VersionError::CommandFailed {
                exit_code: Some(1),
                stderr: stderr.clone(),
            });
        }
        Ok(if preview {
            self.preview.clone()
        } else {
            self.actual.clone()
        })
    }
}

// =============================================================================
// NotesGenerator
// =============================================================================

pub struct FakeNotes {
    journal: Journal,
    notes: ReleaseNotes,
}

impl FakeNotes {
    pub fn new(journal: &Journal, text: &str) -> Self {
        Self {
            journal: journal.clone(),
            notes: ReleaseNotes::new(text),
        }
    }

    pub fn with_warning(mut self, warning: &str) -> Self {
        self.notes = self.notes.with_warning(warning);
        self
    }
}

#[async_trait]
impl NotesGenerator for FakeNotes {
    async fn generate(
        &self,
        branch: &str,
        version: &VersionId,
    ) -> Result<ReleaseNotes, NotesError> {
        self.journal.record(format!("notes {branch} {version}"));
        Ok(self.notes.clone())
    }
}

// =============================================================================
// SourceControl
// =============================================================================

pub struct FakeScm {
    journal: Journal,
    branch: String,
    last_subject: String,
    tag_result: (i32, String),
    push_result: (i32, String),
}

impl FakeScm {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            branch: "main".to_string(),
            last_subject: "Fix crash on startup".to_string(),
            tag_result: (0, String::new()),
            push_result: (0, String::new()),
        }
    }

    pub fn on_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    pub fn last_subject(mut self, subject: &str) -> Self {
        self.last_subject = subject.to_string();
        self
    }

    pub fn tag_fails(mut self, stderr: &str) -> Self {
        self.tag_result = (128, stderr.to_string());
        self
    }

    pub fn push_fails(mut self, stderr: &str) -> Self {
        self.push_result = (1, stderr.to_string());
        self
    }
}

#[async_trait]
impl SourceControl for FakeScm {
    async fn tag(&self, name: &str, message: &str) -> Result<CommandOutput, ScmError> {
        self.journal.record(format!("tag {name} {message}"));
        Ok(output(self.tag_result.0, &self.tag_result.1))
    }

    async fn push(&self, branch: &str, with_tags: bool) -> Result<CommandOutput, ScmError> {
        self.journal.record(format!(
            "push {branch}{}",
            if with_tags { " --follow-tags" } else { "" }
        ));
        Ok(output(self.push_result.0, &self.push_result.1))
    }

    async fn last_commit_subject(&self) -> Result<String, ScmError> {
        self.journal.record("last-commit");
        Ok(self.last_subject.clone())
    }

    async fn current_branch(&self) -> Result<String, ScmError> {
        self.journal.record("current-branch");
        Ok(self.branch.clone())
    }
}

// =============================================================================
// ReleaseHost
// =============================================================================

pub struct FakeHost {
    journal: Journal,
    releases: Vec<ReleaseSummary>,
    next_id: u64,
    create_status: Option<u16>,
    drafts: Mutex<Vec<(String, DraftRelease)>>,
}

impl FakeHost {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            releases: Vec::new(),
            next_id: 42,
            create_status: None,
            drafts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_release(mut self, tag_name: &str, draft: bool) -> Self {
        let id = ReleaseId::new(self.releases.len() as u64 + 1);
        self.releases.push(ReleaseSummary {
            id,
            tag_name: tag_name.to_string(),
            draft,
            created_at: None,
        });
        self
    }

    pub fn rejecting_create(mut self, status: u16) -> Self {
        self.create_status = Some(status);
        self
    }

    /// Drafts created so far with the project they were created in.
    pub fn drafts(&self) -> Vec<(String, DraftRelease)> {
        self.drafts.lock().clone()
    }
}

#[async_trait]
impl ReleaseHost for FakeHost {
    async fn list_releases(&self, project: &str) -> Result<Vec<ReleaseSummary>, HostError> {
        self.journal.record(format!("list-releases {project}"));
        Ok(self.releases.clone())
    }

    async fn create_draft(
        &self,
        project: &str,
        draft: &DraftRelease,
    ) -> Result<CreatedRelease, HostError> {
        self.journal
            .record(format!("create-draft {project} {}", draft.tag_name));
        if let Some(status) = self.create_status {
            return Err(HostError::Api {
                url: format!("https://api.test/repos/electron/{project}/releases"),
                status,
                body: r#"{"message":"Validation Failed"}"#.to_string(),
            });
        }
        self.drafts.lock().push((project.to_string(), draft.clone()));
        Ok(CreatedRelease {
            id: ReleaseId::new(self.next_id),
        })
    }
}

// =============================================================================
// BuildTrigger
// =============================================================================

pub struct FakeTrigger {
    journal: Journal,
    options: Mutex<Vec<TriggerOptions>>,
}

impl FakeTrigger {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            options: Mutex::new(Vec::new()),
        }
    }

    pub fn options(&self) -> Vec<TriggerOptions> {
        self.options.lock().clone()
    }
}

#[async_trait]
impl BuildTrigger for FakeTrigger {
    async fn trigger(&self, branch: &str, options: TriggerOptions) -> Result<(), TriggerError> {
        self.journal.record(format!("trigger {branch}"));
        self.options.lock().push(options);
        Ok(())
    }
}

// =============================================================================
// Confirmer
// =============================================================================

pub struct FakeConfirmer {
    journal: Journal,
    answer: bool,
}

impl FakeConfirmer {
    pub fn answering(journal: &Journal, answer: bool) -> Self {
        Self {
            journal: journal.clone(),
            answer,
        }
    }
}

impl Confirmer for FakeConfirmer {
    fn confirm(&self, version: &VersionId) -> std::io::Result<bool> {
        self.journal.record(format!("confirm {version}"));
        Ok(self.answer)
    }
}
