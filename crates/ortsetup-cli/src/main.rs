//! CLI entry point - the composition root.
//!
//! Wires the process runner and tool locator into the installer, probes
//! the host once, and maps fatal errors to exit code 1. SIGINT exits 0 at
//! any point; an interrupted install is not an error condition.

use std::sync::Arc;

use clap::Parser;
use ortsetup_cli::Cli;
use ortsetup_runtime::{Installer, InstallerConfig, PathToolLocator, ProcessRunner, probe_env};
use tracing::debug;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(0);
        }
    });

    // Parse CLI arguments
    let cli = Cli::parse();

    let runner = Arc::new(ProcessRunner::new());
    let tools = Arc::new(PathToolLocator::new());
    let context = probe_env(runner.as_ref(), tools.as_ref()).await;
    debug!(backend = %cli.onnxruntime, "starting installation");

    let installer = Installer::new(
        runner,
        tools,
        context,
        InstallerConfig {
            manifest_path: cli.requirements,
            skip_conda: cli.skip_conda,
        },
    );

    if let Err(error) = installer.run(cli.onnxruntime).await {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
