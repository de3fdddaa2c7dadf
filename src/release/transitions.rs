// ABOUTME: State transition methods for the release pipeline.
// ABOUTME: Each method consumes self and returns the next state on success.

use crate::adapters::{
    BuildTrigger, Confirmer, NotesError, NotesGenerator, ReleaseHost, ReleaseNotes, SourceControl,
    TriggerOptions, VersionResolver,
};
use crate::types::VersionId;

use super::channel::{NIGHTLY_NOTES, NotesPolicy, ReleaseSettings};
use super::draft::DraftRelease;
use super::error::ReleaseError;
use super::guard::find_duplicate_draft;
use super::release::Release;
use super::state::{
    Completed, Confirmed, Drafted, Planned, Prepared, Pushed, Tagged, Verified,
};

/// Notes for `version` according to the channel's notes policy.
///
/// Nightly releases get a fixed placeholder and the generator is not called.
pub async fn notes_for<N: NotesGenerator + ?Sized>(
    settings: &ReleaseSettings,
    generator: &N,
    branch: &str,
    version: &VersionId,
) -> Result<ReleaseNotes, NotesError> {
    match settings.notes {
        NotesPolicy::NightlyPlaceholder => Ok(ReleaseNotes::new(NIGHTLY_NOTES)),
        NotesPolicy::Generate => {
            tracing::info!("Generating release notes for {}", branch);
            generator.generate(branch, version).await
        }
    }
}

// =============================================================================
// Planned -> Confirmed
// =============================================================================

impl Release<Planned> {
    /// Preview the next version and ask the operator to confirm it.
    ///
    /// Nothing durable happens here.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::Declined` if the operator says no.
    pub async fn confirm<V, C>(
        self,
        resolver: &V,
        confirmer: &C,
    ) -> Result<Release<Confirmed>, ReleaseError>
    where
        V: VersionResolver + ?Sized,
        C: Confirmer + ?Sized,
    {
        let candidate = resolver.resolve(self.settings.channel, true).await?;

        if !confirmer.confirm(&candidate).map_err(ReleaseError::Prompt)? {
            return Err(ReleaseError::Declined(candidate));
        }

        tracing::info!("Starting release of {}", candidate);
        Ok(Release {
            settings: self.settings,
            branch: self.branch,
            state: Confirmed { candidate },
        })
    }
}

// =============================================================================
// Confirmed -> Prepared
// =============================================================================

impl Release<Confirmed> {
    /// Resolve the authoritative version and generate its notes.
    ///
    /// # Errors
    ///
    /// Returns an error if version resolution or notes generation fails.
    #[must_use = "release state must be used"]
    pub async fn prepare<V, N>(
        self,
        resolver: &V,
        generator: &N,
    ) -> Result<Release<Prepared>, ReleaseError>
    where
        V: VersionResolver + ?Sized,
        N: NotesGenerator + ?Sized,
    {
        tracing::info!("Bumping for new \"{}\" version", self.settings.channel);
        let version = resolver.resolve(self.settings.channel, false).await?;
        let notes = notes_for(&self.settings, generator, &self.branch, &version).await?;

        Ok(Release {
            settings: self.settings,
            branch: self.branch,
            state: Prepared { version, notes },
        })
    }
}

// =============================================================================
// Prepared -> Tagged
// =============================================================================

impl Release<Prepared> {
    /// Create an annotated tag named after the version, with the version as message.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::Tag` with git's stderr if tagging is rejected.
    #[must_use = "release state must be used"]
    pub async fn tag<G: SourceControl + ?Sized>(
        self,
        scm: &G,
    ) -> Result<Release<Tagged>, ReleaseError> {
        let Prepared { version, notes } = self.state;
        tracing::info!("Tagging release {}", version);

        let output = scm.tag(version.as_str(), version.as_str()).await?;
        if !output.success() {
            return Err(ReleaseError::Tag {
                stderr: output.diagnostic().to_string(),
                exit_code: output.exit_code,
                version,
            });
        }

        Ok(Release {
            settings: self.settings,
            branch: self.branch,
            state: Tagged { version, notes },
        })
    }
}

// =============================================================================
// Tagged -> Verified
// =============================================================================

impl Release<Tagged> {
    /// Make sure the host has no draft for this version yet.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::DuplicateDraft` if such a draft exists, or
    /// `ReleaseError::ListReleases` if the host cannot be queried.
    #[must_use = "release state must be used"]
    pub async fn check_for_draft<H: ReleaseHost + ?Sized>(
        self,
        host: &H,
    ) -> Result<Release<Verified>, ReleaseError> {
        let Tagged { version, notes } = self.state;
        tracing::info!("Checking for existing draft release");

        let releases = host
            .list_releases(&self.settings.project)
            .await
            .map_err(ReleaseError::ListReleases)?;

        if let Some(existing) = find_duplicate_draft(&releases, &version) {
            tracing::warn!(
                "Draft release {} for {} already exists (created {:?})",
                existing.id,
                existing.tag_name,
                existing.created_at
            );
            return Err(ReleaseError::DuplicateDraft(version));
        }

        Ok(Release {
            settings: self.settings,
            branch: self.branch,
            state: Verified { version, notes },
        })
    }
}

// =============================================================================
// Verified -> Drafted
// =============================================================================

impl Release<Verified> {
    /// Build the draft release record for this version.
    pub fn draft(&self) -> DraftRelease {
        DraftRelease::new(
            &self.settings,
            &self.state.version,
            &self.state.notes.text,
            &self.branch,
        )
    }

    /// Create the draft release on the host.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::CreateDraft` if the host rejects it.
    #[must_use = "release state must be used"]
    pub async fn create_draft<H: ReleaseHost + ?Sized>(
        self,
        host: &H,
    ) -> Result<Release<Drafted>, ReleaseError> {
        let draft = self.draft();
        let created = host
            .create_draft(&self.settings.project, &draft)
            .await
            .map_err(ReleaseError::CreateDraft)?;

        tracing::info!("Release has been created with id: {}", created.id);
        Ok(Release {
            settings: self.settings,
            branch: self.branch,
            state: Drafted {
                version: self.state.version,
                release_id: created.id,
            },
        })
    }
}

// =============================================================================
// Drafted -> Pushed
// =============================================================================

impl Release<Drafted> {
    /// Push HEAD to the release branch, following tags.
    ///
    /// The tag and draft stay in place if this fails.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::Push` with git's stderr if the push is rejected.
    #[must_use = "release state must be used"]
    pub async fn push<G: SourceControl + ?Sized>(
        self,
        scm: &G,
    ) -> Result<Release<Pushed>, ReleaseError> {
        let output = scm.push(&self.branch, true).await?;
        if !output.success() {
            return Err(ReleaseError::Push {
                branch: self.branch,
                exit_code: output.exit_code,
                stderr: output.diagnostic().to_string(),
            });
        }

        Ok(Release {
            settings: self.settings,
            branch: self.branch,
            state: Pushed {
                version: self.state.version,
                release_id: self.state.release_id,
            },
        })
    }
}

// =============================================================================
// Pushed -> Completed
// =============================================================================

impl Release<Pushed> {
    /// Start the release builds for the branch, publishing to the host.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::Trigger` if the builds cannot be started.
    #[must_use = "release state must be used"]
    pub async fn trigger_builds<T: BuildTrigger + ?Sized>(
        self,
        trigger: &T,
        automatic: bool,
    ) -> Result<Release<Completed>, ReleaseError> {
        let options = TriggerOptions {
            publish_to_host: true,
            automatic,
        };
        trigger.trigger(&self.branch, options).await?;

        Ok(Release {
            settings: self.settings,
            branch: self.branch,
            state: Completed {
                version: self.state.version,
                release_id: self.state.release_id,
            },
        })
    }
}
