//! Native-library search-path resolution for the active environment.
//!
//! The accelerated runtime dlopens its native dependencies (TensorRT,
//! cuDNN) at process start; those live in subpackage directories under the
//! conda prefix that only exist when the matching package variant was
//! actually installed. Candidate paths are therefore filtered against the
//! filesystem at resolution time instead of constructed blindly.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::platform::Platform;
use crate::pyver::PyVersion;

/// OS search-path variable consulted and persisted per platform.
///
/// `None` means the platform has no supported accelerated loader path.
pub const fn library_path_var(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Linux => Some("LD_LIBRARY_PATH"),
        Platform::Windows => Some("PATH"),
        Platform::Other => None,
    }
}

/// Candidate native-library directories under the environment prefix.
fn candidate_paths(platform: Platform, prefix: &Path, py: Option<PyVersion>) -> Vec<PathBuf> {
    match platform {
        Platform::Linux => {
            let mut candidates = vec![prefix.join("lib")];
            // tensorrt_libs sits under the interpreter's site-packages;
            // without a probed interpreter there is nothing to derive.
            if let Some(py) = py {
                candidates.push(
                    prefix
                        .join("lib")
                        .join(py.site_dir_name())
                        .join("site-packages")
                        .join("tensorrt_libs"),
                );
            }
            candidates
        }
        Platform::Windows => vec![
            prefix
                .join("Lib")
                .join("site-packages")
                .join("nvidia")
                .join("cudnn")
                .join("bin"),
            prefix.join("Lib").join("site-packages").join("tensorrt_libs"),
            prefix.join("Library").join("bin"),
        ],
        Platform::Other => Vec::new(),
    }
}

/// Resolve the ordered set of library directories to expose to the loader.
///
/// `existing` is the current value of the search-path variable (unset is
/// an empty sequence, never an error). Its entries keep their relative
/// order and precede any newly derived candidate; duplicates keep their
/// first occurrence; paths absent from the filesystem are dropped. An
/// empty result is valid and means there is nothing to configure.
pub fn resolve_library_paths(
    platform: Platform,
    prefix: &Path,
    py: Option<PyVersion>,
    existing: Option<&str>,
) -> Vec<PathBuf> {
    let separator = platform.path_separator();
    let mut merged: Vec<PathBuf> = existing
        .unwrap_or_default()
        .split(separator)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect();
    merged.extend(candidate_paths(platform, prefix, py));

    let mut seen = BTreeSet::new();
    merged
        .into_iter()
        .filter(|path| path.exists() && seen.insert(path.clone()))
        .collect()
}

/// Join resolved paths back into the variable's value form.
pub fn join_library_paths(platform: Platform, paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(&platform.path_separator().to_string())
}
