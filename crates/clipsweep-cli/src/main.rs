//! clipsweep - delete note attachments that no note references.

use clap::Parser;
use clipsweep_cli::{Cli, Formatter};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);
    if !io::stdout().is_terminal() {
        cli.no_color = true;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match clipsweep_cli::run(&cli, &mut input, &mut out) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            let formatter = Formatter::new(io::stderr().is_terminal() && !cli.no_color);
            eprintln!("{}", formatter.error(&e.to_string()));
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so stdout only carries the report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
