//! CLI surface for ortsetup.

#![deny(unsafe_code)]

pub mod parser;
pub mod wording;

pub use parser::Cli;
