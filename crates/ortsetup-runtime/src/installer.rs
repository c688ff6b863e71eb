//! Install orchestration.
//!
//! The protocol is strictly ordered and single-pass: tool check, conda
//! check, catalog lookup, generic manifest install, runtime install, CUDA
//! library-path wiring, DirectML numpy pin. Every package failure is fatal
//! and aborts the run; only the environment-tool steps degrade to
//! warnings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ortsetup_core::catalog::{Accelerator, BackendEntry, Catalog, build_catalog};
use ortsetup_core::context::EnvContext;
use ortsetup_core::error::InstallError;
use ortsetup_core::library_path::{join_library_paths, library_path_var, resolve_library_paths};
use ortsetup_core::manifest::read_manifest;
use ortsetup_core::plan::{InstallStep, rocm_wheel_url};
use ortsetup_core::ports::{CommandRunner, ToolLocator};
use tracing::{debug, warn};

const UV_TOOL: &str = "uv";
const UV_HINT: &str = "https://github.com/astral-sh/uv";
const CONDA_TOOL: &str = "conda";

/// numpy release ABI-compatible with the pinned DirectML runtime build.
const DIRECTML_NUMPY_PIN: &str = "numpy==1.26.4";

/// Orchestrator configuration supplied by the CLI.
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// Dependency manifest to install generically.
    pub manifest_path: PathBuf,
    /// Skip the active-conda check and the library-path persistence step.
    pub skip_conda: bool,
}

/// The install orchestrator.
///
/// Owns the read-only environment context and the platform catalog;
/// external effects go through the injected ports.
pub struct Installer {
    runner: Arc<dyn CommandRunner>,
    tools: Arc<dyn ToolLocator>,
    context: EnvContext,
    catalog: Catalog,
    config: InstallerConfig,
}

impl Installer {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        tools: Arc<dyn ToolLocator>,
        context: EnvContext,
        config: InstallerConfig,
    ) -> Self {
        let catalog = build_catalog(context.platform);
        Self {
            runner,
            tools,
            context,
            catalog,
            config,
        }
    }

    /// Run the full installation protocol for the chosen backend.
    pub async fn run(&self, accelerator: Accelerator) -> Result<(), InstallError> {
        let uv = self
            .tools
            .locate(UV_TOOL)
            .ok_or(InstallError::ToolNotFound {
                tool: UV_TOOL,
                hint: UV_HINT,
            })?;

        // Refuse to pollute a system-wide installation unless told to.
        if !self.config.skip_conda && !self.context.has_conda() {
            return Err(InstallError::EnvironmentNotActive);
        }

        let entry =
            self.catalog
                .get(&accelerator)
                .copied()
                .ok_or(InstallError::UnsupportedBackend {
                    accelerator,
                    platform: self.context.platform,
                })?;

        self.install_manifest(&uv).await?;
        self.install_runtime(&uv, accelerator, entry).await?;

        if accelerator == Accelerator::Cuda && self.context.has_conda() && !self.config.skip_conda
        {
            self.configure_library_path(&uv).await?;
        }

        if accelerator == Accelerator::Directml {
            println!("Installing pinned numpy for the DirectML runtime...");
            self.execute(
                &uv,
                InstallStep::GenericPackage {
                    spec: DIRECTML_NUMPY_PIN.to_string(),
                },
            )
            .await?;
        }

        println!();
        println!("Installation process completed.");
        Ok(())
    }

    /// Install every manifest specifier that survives filtering, in file
    /// order, aborting on the first failure.
    async fn install_manifest(&self, uv: &Path) -> Result<(), InstallError> {
        let specs = read_manifest(&self.config.manifest_path)?;
        println!(
            "Installing dependencies from {}...",
            self.config.manifest_path.display()
        );
        for spec in specs {
            self.execute(uv, InstallStep::GenericPackage { spec }).await?;
        }
        Ok(())
    }

    /// Install the selected runtime package.
    ///
    /// ROCm ships as a direct wheel download keyed by ABI tag; when no
    /// pre-built wheel matches, fall back to a name/version install whose
    /// failure is surfaced as-is.
    async fn install_runtime(
        &self,
        uv: &Path,
        accelerator: Accelerator,
        entry: BackendEntry,
    ) -> Result<(), InstallError> {
        println!("Installing onnxruntime variant: {accelerator}");

        let step = if accelerator == Accelerator::Rocm {
            match rocm_wheel_url(entry.version, self.context.py) {
                Some(url) => {
                    println!("Installing ROCm ONNXRuntime from: {url}");
                    InstallStep::WheelUrl { url }
                }
                None => {
                    let tag = self
                        .context
                        .py
                        .map_or_else(|| "unknown".to_string(), |py| py.abi_tag());
                    warn!(abi_tag = %tag, "no pre-built ROCm wheel for this interpreter");
                    eprintln!(
                        "Warning: Python ABI tag {tag} may not have a pre-built ROCm ONNXRuntime wheel."
                    );
                    eprintln!(
                        "Attempting standard install for {}, which might fail or not use ROCm.",
                        entry.requirement()
                    );
                    InstallStep::RuntimePackage {
                        name: entry.package.to_string(),
                        version: entry.version.to_string(),
                    }
                }
            }
        } else {
            InstallStep::RuntimePackage {
                name: entry.package.to_string(),
                version: entry.version.to_string(),
            }
        };

        self.execute(uv, step).await
    }

    /// Resolve the native-library search path and persist it into the
    /// active conda environment.
    async fn configure_library_path(&self, uv: &Path) -> Result<(), InstallError> {
        let Some(var_name) = library_path_var(self.context.platform) else {
            return Ok(());
        };
        let Some(prefix) = self.context.conda_prefix.clone() else {
            return Ok(());
        };

        println!("Configuring conda environment variables for CUDA...");
        let existing = std::env::var(var_name).ok();
        let paths = resolve_library_paths(
            self.context.platform,
            &prefix,
            self.context.py,
            existing.as_deref(),
        );

        if paths.is_empty() {
            println!("No library paths found to configure.");
            return Ok(());
        }

        let value = join_library_paths(self.context.platform, &paths);
        self.execute(
            uv,
            InstallStep::EnvVarPersist {
                name: var_name.to_string(),
                value,
            },
        )
        .await
    }

    /// Execute one install step. One handler per variant; package steps
    /// are fatal on failure, environment persistence degrades to warnings.
    async fn execute(&self, uv: &Path, step: InstallStep) -> Result<(), InstallError> {
        debug!(?step, "executing install step");
        match step {
            InstallStep::GenericPackage { spec } => {
                println!("Installing: {spec}");
                self.uv_install(uv, spec).await
            }
            InstallStep::RuntimePackage { name, version } => {
                let spec = format!("{name}=={version}");
                println!("Installing: {spec}");
                self.uv_install(uv, spec).await
            }
            InstallStep::WheelUrl { url } => self.uv_install(uv, url).await,
            InstallStep::EnvVarPersist { name, value } => {
                let Some(conda) = self.tools.locate(CONDA_TOOL) else {
                    eprintln!(
                        "Warning: 'conda' executable not found. Skipping environment variable setup."
                    );
                    return Ok(());
                };
                println!("Setting {name} for the conda environment...");
                let args: Vec<String> = ["env", "config", "vars", "set"]
                    .into_iter()
                    .map(String::from)
                    .chain([format!("{name}={value}")])
                    .collect();
                match self.runner.run(&conda, &args).await {
                    Ok(()) => {
                        println!();
                        println!(
                            "Conda environment variables set. Reactivate your environment for changes to take effect."
                        );
                    }
                    Err(e) => {
                        eprintln!("Warning: failed to set conda environment variables: {e}");
                    }
                }
                Ok(())
            }
        }
    }

    /// `uv pip install <spec> --reinstall`, fatal on any failure.
    async fn uv_install(&self, uv: &Path, spec: String) -> Result<(), InstallError> {
        let args: Vec<String> = ["pip", "install"]
            .into_iter()
            .map(String::from)
            .chain([spec.clone(), "--reinstall".to_string()])
            .collect();
        self.runner
            .run(uv, &args)
            .await
            .map_err(|source| InstallError::PackageInstall { spec, source })
    }
}
