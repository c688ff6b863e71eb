//! Main CLI parser.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ortsetup_core::Accelerator;

use crate::wording;

/// Command-line interface definition for the installer.
#[derive(Parser)]
#[command(name = "ortsetup")]
#[command(about = "Install application dependencies for a chosen onnxruntime backend")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    #[arg(
        long = "onnxruntime",
        required = true,
        value_parser = parse_accelerator,
        value_name = "BACKEND",
        help = wording::get_or_panic("help.onnxruntime"),
    )]
    pub onnxruntime: Accelerator,

    #[arg(long = "skip-conda", help = wording::get_or_panic("help.skip_conda"))]
    pub skip_conda: bool,

    #[arg(
        long = "requirements",
        default_value = "requirements.txt",
        value_name = "FILE",
        help = wording::get_or_panic("help.requirements"),
    )]
    pub requirements: PathBuf,

    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn parse_accelerator(value: &str) -> Result<Accelerator, String> {
    value.parse().map_err(|_| {
        let choices = Accelerator::ALL
            .iter()
            .map(|choice| choice.name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("'{value}' is not a known backend (choose from: {choices})")
    })
}
