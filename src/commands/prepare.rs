// ABOUTME: Prepare-release command implementation.
// ABOUTME: Wires config-driven collaborators into the orchestrator and reports the outcome.

use cutter::adapters::{
    BuildTrigger, CommandBuildTrigger, CommandNotesGenerator, CommandVersionResolver,
    GitHubClient, GitLogNotesGenerator, NotesGenerator, PromptConfirmer, SkipBuildTrigger,
    SystemGit,
};
use cutter::config::Config;
use cutter::diagnostics::{Diagnostics, Warning};
use cutter::error::Result;
use cutter::output::Output;
use cutter::release::{
    Collaborators, Invocation, Orchestrator, Outcome, PipelineMode, ReleaseChannel,
    select_channel,
};
use std::path::PathBuf;

/// Everything the CLI resolved for one prepare run.
#[derive(Debug)]
pub struct PrepareRequest {
    pub channel: Option<ReleaseChannel>,
    pub mode: PipelineMode,
    pub is_beta: bool,
    pub branch: Option<String>,
    pub automatic: bool,
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
}

/// Prepare a release, or preview its version or notes.
pub async fn prepare(request: PrepareRequest, mut output: Output) -> Result<()> {
    output.start_timer();
    let channel = select_channel(request.channel, request.mode)?;

    let config = match &request.config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover(&request.repo_root)?,
    };
    let release_config = config.release_config(channel, &request.repo_root);

    // Fail before prompting when the draft could never be created.
    if request.mode.has_side_effects() {
        config.host_token()?;
    }

    let repo_root = request.repo_root.clone();
    let git = SystemGit::new(repo_root.clone()).with_remote(config.remote.clone());
    let version = CommandVersionResolver::new(config.version.command.clone(), repo_root.clone());

    let notes: Box<dyn NotesGenerator> = match &config.notes {
        Some(notes) => Box::new(CommandNotesGenerator::new(
            notes.command.clone(),
            repo_root.clone(),
        )),
        None => Box::new(GitLogNotesGenerator::new(git.clone())),
    };
    let trigger: Box<dyn BuildTrigger> = match &config.build {
        Some(build) => Box::new(CommandBuildTrigger::new(
            build.command.clone(),
            repo_root.clone(),
        )),
        None => Box::new(SkipBuildTrigger),
    };

    let mut host = GitHubClient::new(config.owner.clone()).with_api_url(config.api_url.clone());
    if let Some(token) = &release_config.host_token {
        host = host.with_token(token.clone());
    }
    let confirmer = PromptConfirmer::stdio();

    let collab = Collaborators {
        version: &version,
        notes: notes.as_ref(),
        scm: &git,
        host: &host,
        trigger: trigger.as_ref(),
        confirmer: &confirmer,
    };
    let invocation = Invocation {
        channel,
        mode: request.mode,
        is_beta: request.is_beta,
        branch: request.branch,
        automatic: request.automatic,
    };

    let mut diag = Diagnostics::default();
    let orchestrator = Orchestrator::new(release_config, collab, &output);
    let result = orchestrator.run(&invocation, &mut diag).await;

    if let Ok(Outcome::Released(report)) = &result
        && config.build.is_none()
    {
        diag.warn(Warning::build_skipped(format!(
            "no build command configured; start the release builds for {} manually",
            report.branch
        )));
    }

    // Emit collected warnings
    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    match result? {
        Outcome::Version(version) => output.value("version", version.as_str()),
        Outcome::Notes { version, notes } => {
            output.progress(&format!("Draft release notes for {version} are:"));
            output.value("notes", &notes.text);
        }
        Outcome::Released(report) => output.success(&format!(
            "Release {} drafted in {} from {} (id {}); publish it once the builds finish.",
            report.version, report.project, report.branch, report.release_id
        )),
    }

    Ok(())
}
