//! CLI module for the Sandhi batch driver
//!
//! Provides:
//! - combine: combine one word pair
//! - generate: write a training dataset as JSON Lines

mod args;
mod commands;
mod errors;

use std::io;

use crate::config::load_config_or_default;

pub use args::{Cli, Command};
pub use commands::{combine, generate, run_command};
pub use errors::{CliError, CliResult};

/// Parse arguments, load configuration, and run the command against stdout
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = load_config_or_default(&cli.config);
    log::debug!("configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(cli.command, config, &mut out)
}
