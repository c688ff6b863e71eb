//! Core domain types and port definitions for ortsetup.
//!
//! This crate is pure: it models the backend decision table, the
//! environment context, the install plan, and the library-path
//! resolution algorithm, plus the ports that adapters implement.
//! No subprocess is ever spawned from here.

#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod context;
pub mod error;
pub mod library_path;
pub mod manifest;
pub mod plan;
pub mod platform;
pub mod ports;
pub mod pyver;

// Re-export commonly used types for convenience
pub use catalog::{Accelerator, BackendEntry, Catalog, ONNXRUNTIME_PREFIX, build_catalog};
pub use context::EnvContext;
pub use error::InstallError;
pub use context::CONDA_PREFIX_VAR;
pub use library_path::{join_library_paths, library_path_var, resolve_library_paths};
pub use manifest::{ManifestError, read_manifest};
pub use plan::{InstallStep, ROCM_SUPPORTED_ABI_TAGS, rocm_wheel_url};
pub use platform::{Platform, detect_platform};
pub use ports::{CommandError, CommandRunner, ToolLocator};
pub use pyver::PyVersion;

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
