//! Error taxonomy for the installation protocol.
//!
//! Every variant here is fatal and maps to exit code 1. Conditions the
//! protocol treats as warnings (environment tool missing, unsupported ABI
//! tag for the ROCm wheel) are logged at the call site and never become
//! errors.

use thiserror::Error;

use crate::catalog::Accelerator;
use crate::manifest::ManifestError;
use crate::platform::Platform;
use crate::ports::CommandError;

/// Fatal conditions of the installation protocol.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The required package-installation tool is not on PATH.
    #[error(
        "'{tool}' command not found. Please install {tool} first.\nVisit {hint} for installation instructions."
    )]
    ToolNotFound { tool: &'static str, hint: &'static str },

    /// No isolated environment is active and the check was not skipped.
    #[error("conda is not activated. Activate your environment or pass --skip-conda.")]
    EnvironmentNotActive,

    /// The dependency manifest could not be read.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// A single package install failed; the run aborts here.
    #[error("failed to install '{spec}': {source}")]
    PackageInstall {
        spec: String,
        #[source]
        source: CommandError,
    },

    /// The requested backend has no entry in this platform's catalog.
    #[error("backend '{accelerator}' is not available on {platform}")]
    UnsupportedBackend {
        accelerator: Accelerator,
        platform: Platform,
    },
}

impl InstallError {
    /// Map error to the process exit code.
    ///
    /// The protocol deliberately uses a single code for every fatal
    /// condition; the message on stderr carries the distinction.
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fatal_condition_exits_one() {
        let errors = [
            InstallError::ToolNotFound {
                tool: "uv",
                hint: "https://github.com/astral-sh/uv",
            },
            InstallError::EnvironmentNotActive,
            InstallError::UnsupportedBackend {
                accelerator: Accelerator::Rocm,
                platform: Platform::Windows,
            },
        ];
        for error in errors {
            assert_eq!(error.exit_code(), 1);
        }
    }

    #[test]
    fn test_unsupported_backend_message_names_both_sides() {
        let error = InstallError::UnsupportedBackend {
            accelerator: Accelerator::Directml,
            platform: Platform::Linux,
        };
        let message = error.to_string();
        assert!(message.contains("directml"));
        assert!(message.contains("linux"));
    }
}
