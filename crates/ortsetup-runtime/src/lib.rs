//! Process runtime and OS-level concerns for ortsetup.
//!
//! Implements the ports defined in ortsetup-core: subprocess execution,
//! PATH lookup, host probing, and the install orchestrator itself.

#![deny(unused_crate_dependencies)]

pub mod command;
pub mod installer;
pub mod probe;
pub mod tools;

pub use command::ProcessRunner;
pub use installer::{Installer, InstallerConfig};
pub use probe::probe_env;
pub use tools::PathToolLocator;

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
