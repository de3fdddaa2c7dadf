// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the release flags, the init subcommand and output options.

use clap::{Args, Parser, Subcommand};
use cutter::output::OutputMode;
use cutter::release::{PipelineMode, ReleaseChannel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutter")]
#[command(about = "Cut a release: bump, tag, draft, push and trigger release builds")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub release: ReleaseArgs,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit one JSON object per event
    #[arg(long, global = true)]
    pub json: bool,

    /// Repository root (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "DIR", global = true)]
    pub repo: Option<PathBuf>,

    /// Config file (defaults to cutter.yml in the repository root)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Release channel: stable, beta or nightly
    pub channel: Option<ReleaseChannel>,

    /// Publish as a full release instead of a prerelease
    #[arg(long)]
    pub stable: bool,

    /// Only print the release notes for the next version
    #[arg(long = "notes-only", alias = "notesOnly")]
    pub notes_only: bool,

    /// Skip the confirmation prompt and mark the builds as unattended
    #[arg(long = "automatic-release", alias = "automaticRelease")]
    pub automatic_release: bool,

    /// Branch to release (defaults to the checked out branch)
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Only print the next version
    #[arg(long = "dry-run", alias = "dryRun")]
    pub dry_run: bool,
}

impl ReleaseArgs {
    pub fn mode(&self) -> PipelineMode {
        PipelineMode::from_flags(self.dry_run, self.notes_only)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new cutter.yml configuration file
    Init {
        /// Product name used for release titles and the host project
        #[arg(long)]
        product: Option<String>,

        /// Owner or organization on the release host
        #[arg(long)]
        owner: Option<String>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
