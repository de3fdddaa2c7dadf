// ABOUTME: Collaborators of the release pipeline: traits and their concrete adapters.
// ABOUTME: git via subprocess, GitHub via REST, and configured external commands.

mod command;
mod git;
mod github;
mod history;
pub mod process;
mod prompt;
pub mod traits;

pub use command::{
    CommandBuildTrigger, CommandNotesGenerator, CommandVersionResolver, SkipBuildTrigger,
};
pub use git::{DEFAULT_REMOTE, SystemGit};
pub use github::{DEFAULT_API_URL, GitHubClient};
pub use history::GitLogNotesGenerator;
pub use process::CommandOutput;
pub use prompt::{AutoConfirmer, PromptConfirmer, is_affirmative};
pub use traits::*;
