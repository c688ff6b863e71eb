//! PATH lookup adapter.

use std::path::PathBuf;

use ortsetup_core::ports::ToolLocator;
use tracing::debug;

/// `ToolLocator` backed by the `which` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathToolLocator;

impl PathToolLocator {
    pub const fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathToolLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => {
                debug!(tool = name, path = %path.display(), "located tool");
                Some(path)
            }
            Err(_) => {
                debug!(tool = name, "tool not found on PATH");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_missing_tool_is_none() {
        let locator = PathToolLocator::new();
        assert!(locator.locate("ortsetup-definitely-not-a-tool").is_none());
    }
}
