//! Install-step model and backend-specific install strategies.

use crate::pyver::PyVersion;

/// ROCm wheel repository release path on repo.radeon.com.
///
/// Tied to the ROCm toolkit release the pinned onnxruntime-rocm build was
/// compiled against; bump together with the catalog version.
pub const ROCM_RELEASE_PATH: &str = "rocm-rel-6.4";

/// ABI tags with a pre-built ROCm wheel at the release path.
pub const ROCM_SUPPORTED_ABI_TAGS: [&str; 3] = ["cp310", "cp311", "cp312"];

/// One unit of work executed by the installer, in plan order.
///
/// Each variant is independently fallible; the orchestrator decides which
/// failures abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    /// Install one manifest specifier through the generic resolver.
    GenericPackage { spec: String },
    /// Install the selected runtime package by `name==version`.
    RuntimePackage { name: String, version: String },
    /// Install the runtime directly from a pre-built wheel URL.
    WheelUrl { url: String },
    /// Persist a variable into the active isolated environment.
    EnvVarPersist { name: String, value: String },
}

/// Build the ROCm wheel download URL for the given interpreter version.
///
/// Returns `None` when no pre-built wheel exists for that ABI tag (or the
/// interpreter version is unknown); the caller falls back to a name/version
/// install.
pub fn rocm_wheel_url(version: &str, py: Option<PyVersion>) -> Option<String> {
    let abi_tag = py?.abi_tag();
    if !ROCM_SUPPORTED_ABI_TAGS.contains(&abi_tag.as_str()) {
        return None;
    }
    let wheel_name = format!("onnxruntime_rocm-{version}-{abi_tag}-{abi_tag}-linux_x86_64.whl");
    Some(format!(
        "https://repo.radeon.com/rocm/manylinux/{ROCM_RELEASE_PATH}/{wheel_name}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rocm_wheel_url_for_supported_abi() {
        let url = rocm_wheel_url("1.21.0", Some(PyVersion::new(3, 11))).unwrap();
        assert_eq!(
            url,
            "https://repo.radeon.com/rocm/manylinux/rocm-rel-6.4/onnxruntime_rocm-1.21.0-cp311-cp311-linux_x86_64.whl"
        );
    }

    #[test]
    fn test_rocm_wheel_url_unsupported_abi() {
        assert!(rocm_wheel_url("1.21.0", Some(PyVersion::new(3, 9))).is_none());
        assert!(rocm_wheel_url("1.21.0", Some(PyVersion::new(3, 13))).is_none());
    }

    #[test]
    fn test_rocm_wheel_url_unknown_interpreter() {
        assert!(rocm_wheel_url("1.21.0", None).is_none());
    }
}
