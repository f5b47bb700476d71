//! clipsweep CLI library.
//!
//! Wires the sweep pipeline to the command line: configuration resolution,
//! the confirmation prompt, output formatting, and exit codes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, SweepMode};
pub use config::{Config, RunSettings};
pub use error::{CliError, Result};
pub use output::Formatter;

use clipsweep_client::ClipperClient;
use clipsweep_janitor::Janitor;
use commands::Outcome;
use std::io::{BufRead, Write};

/// Run one sweep as described by the parsed command line.
///
/// Reads the confirmation answer from `input` and writes the report to `out`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<Outcome> {
    let settings = Config::load(cli.config.as_deref())?.resolve(cli)?;
    tracing::debug!("Using service at {}", settings.client.base_url);

    let formatter = Formatter::new(settings.color);
    let janitor = Janitor::new(settings.janitor)?;
    let mut client = ClipperClient::new(settings.client)?;

    commands::execute_sweep(&janitor, &mut client, cli.mode(), &formatter, input, out)
}
