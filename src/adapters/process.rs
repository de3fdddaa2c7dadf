// ABOUTME: Subprocess execution shared by the git and command-backed adapters.
// ABOUTME: Captures exit status and output text without interpreting them.

use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Output from a local command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code of the command (None when killed by a signal).
    pub exit_code: Option<i32>,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stderr when it has content, otherwise stdout. Git reports some
    /// failures on stdout only.
    pub fn diagnostic(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }
}

/// Run `program` with `args` in `cwd` and wait for it to exit.
///
/// A non-zero exit is not an error here; only failing to spawn is.
pub(crate) async fn run_command(
    program: &str,
    args: &[String],
    cwd: &Path,
    envs: &HashMap<String, String>,
) -> std::io::Result<CommandOutput> {
    tracing::debug!("Running {} {} in {}", program, args.join(" "), cwd.display());

    let output = Command::new(program)
        .args(args)
        .envs(envs)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    let result = CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    if !result.success() {
        tracing::debug!("{} exited with {:?}", program, result.exit_code);
    }

    Ok(result)
}
