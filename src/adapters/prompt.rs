// ABOUTME: Confirmer implementations: interactive prompt and automatic yes.
// ABOUTME: The prompt accepts any answer starting with y, case-insensitively.

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use parking_lot::Mutex;

use super::traits::Confirmer;
use crate::types::VersionId;

/// Whether an answer to the confirmation prompt means yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Asks on a terminal (or any reader/writer pair).
pub struct PromptConfirmer<R, W> {
    io: Mutex<(R, W)>,
}

impl PromptConfirmer<BufReader<Stdin>, Stdout> {
    /// Prompt on stdout, read the answer from stdin.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> PromptConfirmer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

impl<R, W> Confirmer for PromptConfirmer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, version: &VersionId) -> std::io::Result<bool> {
        let mut io = self.io.lock();
        let (reader, writer) = &mut *io;

        write!(writer, "Do you want to create the release {version} (y/N)? ")?;
        writer.flush()?;

        let mut answer = String::new();
        reader.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Confirms every release without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirmer;

impl Confirmer for AutoConfirmer {
    fn confirm(&self, version: &VersionId) -> std::io::Result<bool> {
        tracing::debug!("Automatic release, confirming {}", version);
        Ok(true)
    }
}
