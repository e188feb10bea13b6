//! External process execution.
//!
//! The secrets manager and the RNG tool are only ever reached through
//! [`CommandRunner`], so the workflow can run against a fake in tests.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{Error, Result, Tool};

/// Captured result of one process invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Trimmed stderr, falling back to the exit code when stderr is empty.
    pub fn detail(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external programs.
pub trait CommandRunner {
    /// Locate `program` (a bare name looked up on `PATH`, or a path) used
    /// in the role `tool`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DependencyMissing` if it can't be found.
    fn resolve(&self, program: &str, tool: Tool) -> Result<PathBuf>;

    /// Run `program` with `args` to completion and capture its output.
    ///
    /// A non-zero exit is not an error here; only failing to spawn is.
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn resolve(&self, program: &str, tool: Tool) -> Result<PathBuf> {
        // which() handles both bare names and explicit paths
        which::which(program).map_err(|_| Error::DependencyMissing {
            program: program.to_string(),
            tool,
        })
    }

    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        trace!(program = %program.display(), args = args.len(), "spawning");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| Error::ExternalTool {
                program: program.display().to_string(),
                action: "start".to_string(),
                detail: e.to_string(),
            })?;

        let stdout = Zeroizing::new(output.stdout);
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
