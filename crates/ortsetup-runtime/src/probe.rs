//! Host probing: platform, active conda environment, interpreter version.
//!
//! Probing has no failure mode. An unknown platform means "default backend
//! only", a missing interpreter means ABI-dependent behavior degrades to
//! its fallbacks.

use std::path::PathBuf;

use ortsetup_core::context::{CONDA_PREFIX_VAR, EnvContext};
use ortsetup_core::platform::detect_platform;
use ortsetup_core::ports::{CommandRunner, ToolLocator};
use ortsetup_core::pyver::PyVersion;
use tracing::debug;

#[cfg(target_os = "windows")]
const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

const PY_VERSION_SNIPPET: &str =
    "import sys; print('{}.{}'.format(sys.version_info[0], sys.version_info[1]))";

/// Capture the host state once, at startup.
pub async fn probe_env(runner: &dyn CommandRunner, tools: &dyn ToolLocator) -> EnvContext {
    let platform = detect_platform();
    let conda_prefix = std::env::var_os(CONDA_PREFIX_VAR).map(PathBuf::from);
    let py = probe_python(runner, tools).await;

    debug!(%platform, has_conda = conda_prefix.is_some(), py = ?py, "probed environment");

    EnvContext {
        platform,
        conda_prefix,
        py,
    }
}

/// Ask the environment's interpreter for its major/minor version.
async fn probe_python(runner: &dyn CommandRunner, tools: &dyn ToolLocator) -> Option<PyVersion> {
    for &candidate in PYTHON_CANDIDATES {
        let Some(python) = tools.locate(candidate) else {
            continue;
        };
        let args = ["-c".to_string(), PY_VERSION_SNIPPET.to_string()];
        match runner.capture(&python, &args).await {
            Ok(output) => {
                if let Some(version) = PyVersion::parse(&output) {
                    return Some(version);
                }
                debug!(candidate, output, "unparseable interpreter version");
            }
            Err(e) => debug!(candidate, error = %e, "interpreter probe failed"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ortsetup_core::ports::CommandError;
    use std::path::Path;

    struct FakeRunner {
        stdout: Result<&'static str, &'static str>,
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, _program: &Path, _args: &[String]) -> Result<(), CommandError> {
            Ok(())
        }

        async fn capture(
            &self,
            program: &Path,
            _args: &[String],
        ) -> Result<String, CommandError> {
            self.stdout
                .map(String::from)
                .map_err(|reason| CommandError::SpawnFailed {
                    program: program.display().to_string(),
                    reason: reason.to_string(),
                })
        }
    }

    struct FakeTools {
        python: Option<PathBuf>,
    }

    impl ToolLocator for FakeTools {
        fn locate(&self, _name: &str) -> Option<PathBuf> {
            self.python.clone()
        }
    }

    #[tokio::test]
    async fn test_probe_python_parses_version() {
        let runner = FakeRunner { stdout: Ok("3.11") };
        let tools = FakeTools {
            python: Some(PathBuf::from("/usr/bin/python3")),
        };
        assert_eq!(
            probe_python(&runner, &tools).await,
            Some(PyVersion::new(3, 11))
        );
    }

    #[tokio::test]
    async fn test_probe_python_none_without_interpreter() {
        let runner = FakeRunner { stdout: Ok("3.11") };
        let tools = FakeTools { python: None };
        assert_eq!(probe_python(&runner, &tools).await, None);
    }

    #[tokio::test]
    async fn test_probe_python_none_on_capture_failure() {
        let runner = FakeRunner {
            stdout: Err("permission denied"),
        };
        let tools = FakeTools {
            python: Some(PathBuf::from("/usr/bin/python3")),
        };
        assert_eq!(probe_python(&runner, &tools).await, None);
    }
}
