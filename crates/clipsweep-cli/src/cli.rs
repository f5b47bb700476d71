//! CLI argument definitions and parsing.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// clipsweep - Delete note attachments that no note references anymore.
///
/// Talks to the note application's Web Clipper service, lists every
/// attachment, keeps the ones no note uses, and deletes them after
/// confirmation.
#[derive(Debug, Parser)]
#[command(name = "clipsweep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Web Clipper service port [default: 41184]
    #[arg(short, long, env = "CLIPSWEEP_PORT")]
    pub port: Option<u16>,

    /// Web Clipper authorization token
    #[arg(short, long, env = "CLIPSWEEP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Web Clipper service host [default: localhost]
    #[arg(long)]
    pub host: Option<String>,

    /// Delete without asking for confirmation
    #[arg(short = 'y', long, conflicts_with = "list")]
    pub yes: bool,

    /// Only list unused attachments, never delete
    #[arg(short, long)]
    pub list: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path [default: ~/.clipsweep/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What to do with the orphans once they are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepMode {
    /// List, then ask before deleting
    Interactive,
    /// Delete without asking
    AutoDelete,
    /// List only
    ReportOnly,
}

impl Cli {
    /// Sweep mode selected by the flags.
    pub fn mode(&self) -> SweepMode {
        if self.list {
            SweepMode::ReportOnly
        } else if self.yes {
            SweepMode::AutoDelete
        } else {
            SweepMode::Interactive
        }
    }
}
