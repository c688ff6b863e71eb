//! Subprocess execution adapter.
//!
//! Every invocation is awaited to completion before the next one starts;
//! the installer is strictly sequential and carries no timeout. Child
//! stdio is inherited so the package manager's own progress output reaches
//! the terminal directly.

use std::path::Path;

use async_trait::async_trait;
use ortsetup_core::ports::{CommandError, CommandRunner};
use tokio::process::Command;
use tracing::debug;

/// `CommandRunner` backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<(), CommandError> {
        debug!(program = %program.display(), ?args, "running command");
        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| CommandError::SpawnFailed {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::NonZeroExit {
                program: program.display().to_string(),
                status: status.to_string(),
            })
        }
    }

    async fn capture(&self, program: &Path, args: &[String]) -> Result<String, CommandError> {
        debug!(program = %program.display(), ?args, "capturing command output");
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| CommandError::SpawnFailed {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(CommandError::NonZeroExit {
                program: program.display().to_string(),
                status: output.status.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_spawn_failure_for_missing_binary() {
        let runner = ProcessRunner::new();
        let result = runner
            .run(&PathBuf::from("/nonexistent/ortsetup-test-binary"), &[])
            .await;
        assert!(matches!(result, Err(CommandError::SpawnFailed { .. })));
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_capture_returns_trimmed_stdout() {
        let runner = ProcessRunner::new();
        let output = runner
            .capture(&PathBuf::from("/bin/echo"), &["3.11".to_string()])
            .await
            .unwrap();
        assert_eq!(output, "3.11");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_nonzero_exit_is_an_error() {
        let runner = ProcessRunner::new();
        let result = runner
            .run(&PathBuf::from("/bin/false"), &[])
            .await;
        assert!(matches!(result, Err(CommandError::NonZeroExit { .. })));
    }
}
