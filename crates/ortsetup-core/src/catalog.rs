//! Backend decision table: accelerator choice → ONNX Runtime package.
//!
//! The catalog is a pure function of the detected platform. Entries for
//! accelerated backends are platform-gated; only `default` is guaranteed
//! to exist everywhere.

use std::collections::BTreeMap;

use crate::platform::Platform;

/// Package-name prefix that identifies the runtime package family.
///
/// Manifest lines starting with this prefix are excluded from generic
/// installation; the runtime is installed separately by backend.
pub const ONNXRUNTIME_PREFIX: &str = "onnxruntime";

/// Hardware-acceleration backend for the ONNX Runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Accelerator {
    /// CPU-only execution (no acceleration)
    Default,
    /// CUDA acceleration (NVIDIA)
    Cuda,
    /// OpenVINO acceleration (Intel)
    Openvino,
    /// DirectML acceleration (Windows)
    Directml,
    /// ROCm acceleration (AMD, Linux)
    Rocm,
}

impl Accelerator {
    /// All choices, in CLI presentation order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Cuda,
        Self::Openvino,
        Self::Directml,
        Self::Rocm,
    ];

    /// Get the CLI/display name for this accelerator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Cuda => "cuda",
            Self::Openvino => "openvino",
            Self::Directml => "directml",
            Self::Rocm => "rocm",
        }
    }
}

impl std::fmt::Display for Accelerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Accelerator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.name() == s)
            .ok_or_else(|| format!("unknown accelerator: {s}"))
    }
}

/// A resolved runtime package for one accelerator choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendEntry {
    pub package: &'static str,
    pub version: &'static str,
}

impl BackendEntry {
    /// `name==version` specifier handed to the package installer.
    pub fn requirement(&self) -> String {
        format!("{}=={}", self.package, self.version)
    }
}

/// Mapping from accelerator choice to runtime package, for one platform.
pub type Catalog = BTreeMap<Accelerator, BackendEntry>;

/// Build the platform-gated backend catalog.
///
/// The `default` entry is always present. CUDA and OpenVINO builds are
/// published for Linux and Windows, DirectML only for Windows, ROCm only
/// for Linux. An unrecognized platform gets the default entry alone.
pub fn build_catalog(platform: Platform) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        Accelerator::Default,
        BackendEntry {
            package: "onnxruntime",
            version: "1.21.1",
        },
    );
    if matches!(platform, Platform::Linux | Platform::Windows) {
        catalog.insert(
            Accelerator::Cuda,
            BackendEntry {
                package: "onnxruntime-gpu",
                version: "1.21.1",
            },
        );
        catalog.insert(
            Accelerator::Openvino,
            BackendEntry {
                package: "onnxruntime-openvino",
                version: "1.21.0",
            },
        );
    }
    if platform == Platform::Windows {
        catalog.insert(
            Accelerator::Directml,
            BackendEntry {
                package: "onnxruntime-directml",
                version: "1.17.3",
            },
        );
    }
    if platform == Platform::Linux {
        catalog.insert(
            Accelerator::Rocm,
            BackendEntry {
                package: "onnxruntime-rocm",
                version: "1.21.0",
            },
        );
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_on_every_platform() {
        for platform in [Platform::Linux, Platform::Windows, Platform::Other] {
            let catalog = build_catalog(platform);
            let entry = catalog
                .get(&Accelerator::Default)
                .expect("default entry must exist");
            assert_eq!(entry.package, "onnxruntime");
        }
    }

    #[test]
    fn test_rocm_iff_linux() {
        assert!(build_catalog(Platform::Linux).contains_key(&Accelerator::Rocm));
        assert!(!build_catalog(Platform::Windows).contains_key(&Accelerator::Rocm));
        assert!(!build_catalog(Platform::Other).contains_key(&Accelerator::Rocm));
    }

    #[test]
    fn test_directml_iff_windows() {
        assert!(build_catalog(Platform::Windows).contains_key(&Accelerator::Directml));
        assert!(!build_catalog(Platform::Linux).contains_key(&Accelerator::Directml));
        assert!(!build_catalog(Platform::Other).contains_key(&Accelerator::Directml));
    }

    #[test]
    fn test_cuda_openvino_iff_desktop_os() {
        for platform in [Platform::Linux, Platform::Windows] {
            let catalog = build_catalog(platform);
            assert!(catalog.contains_key(&Accelerator::Cuda));
            assert!(catalog.contains_key(&Accelerator::Openvino));
        }
        let other = build_catalog(Platform::Other);
        assert!(!other.contains_key(&Accelerator::Cuda));
        assert!(!other.contains_key(&Accelerator::Openvino));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_requirement_format() {
        let entry = BackendEntry {
            package: "onnxruntime-gpu",
            version: "1.21.1",
        };
        assert_eq!(entry.requirement(), "onnxruntime-gpu==1.21.1");
    }

    #[test]
    fn test_accelerator_round_trips_through_str() {
        for choice in Accelerator::ALL {
            assert_eq!(choice.name().parse::<Accelerator>(), Ok(choice));
        }
        assert!("vulkan".parse::<Accelerator>().is_err());
    }
}
