//! Dependency manifest parsing.
//!
//! The manifest is a `requirements.txt`-style file: one package specifier
//! per line, `#` starts a comment, blank lines are ignored. Specifiers in
//! the runtime package family are filtered out here; the runtime is
//! installed separately by backend choice.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::ONNXRUNTIME_PREFIX;

/// Errors that can occur while reading the dependency manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist.
    #[error("requirements file not found: {0}")]
    NotFound(PathBuf),

    /// The manifest exists but could not be read.
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },
}

/// Read the manifest and return the specifiers to install generically.
///
/// Lines are passed through whole (splitting on whitespace would break
/// hashes and pip directives); only comment, blank, and runtime-package
/// lines are dropped.
pub fn read_manifest(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty() && !line.starts_with('#') && !line.starts_with(ONNXRUNTIME_PREFIX)
        })
        .map(String::from)
        .collect())
}
