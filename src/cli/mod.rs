//! CLI layer: argument parsing, run and output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use error::{parse_exit_code, CliError, CliResult};
