//! Ports for external-process execution and tool discovery.
//!
//! Core owns the traits and error types (pure); implementations live in
//! ortsetup-runtime and are injected by the CLI at the composition root.
//! The orchestrator's fail-fast policy is exercised in tests against fake
//! implementations without spawning anything.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from invoking an external command.
///
/// Every failure is treated as non-transient; there is no retry layer.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process could not be spawned at all.
    #[error("failed to start {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The process ran and exited unsuccessfully.
    #[error("{program} exited with {status}")]
    NonZeroExit { program: String, status: String },
}

/// Port for running external commands.
///
/// Implementations block (await) until the child exits; the orchestrator
/// is strictly sequential and never overlaps two invocations.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command with inherited stdio, returning once it exits.
    async fn run(&self, program: &Path, args: &[String]) -> Result<(), CommandError>;

    /// Run a command and capture its stdout (trimmed).
    async fn capture(&self, program: &Path, args: &[String]) -> Result<String, CommandError>;
}

/// Port for locating executables on the search path.
pub trait ToolLocator: Send + Sync {
    /// Absolute path of `name` if present on PATH.
    fn locate(&self, name: &str) -> Option<PathBuf>;
}
