//! Read-once environment context.

use std::path::PathBuf;

use crate::platform::Platform;
use crate::pyver::PyVersion;

/// Marker variable set by conda when an environment is activated.
pub const CONDA_PREFIX_VAR: &str = "CONDA_PREFIX";

/// Host state captured once at startup and treated as read-only afterward.
///
/// `py` is `None` when no interpreter could be probed in the active
/// environment; callers degrade gracefully (ABI-specific wheel selection
/// falls back, interpreter-versioned library paths are skipped).
#[derive(Debug, Clone)]
pub struct EnvContext {
    pub platform: Platform,
    pub conda_prefix: Option<PathBuf>,
    pub py: Option<PyVersion>,
}

impl EnvContext {
    /// Whether an isolated (conda) environment is currently active.
    pub const fn has_conda(&self) -> bool {
        self.conda_prefix.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_conda_tracks_prefix() {
        let mut ctx = EnvContext {
            platform: Platform::Linux,
            conda_prefix: None,
            py: Some(PyVersion::new(3, 11)),
        };
        assert!(!ctx.has_conda());
        ctx.conda_prefix = Some(PathBuf::from("/opt/conda/envs/app"));
        assert!(ctx.has_conda());
    }
}
