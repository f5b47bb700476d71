//! Sweep command implementation.

use crate::cli::SweepMode;
use crate::error::{Result, EXIT_PARTIAL};
use crate::output::{Formatter, CONFIRM_PROMPT};
use clipsweep_domain::ResourceService;
use clipsweep_janitor::{Janitor, RunSummary};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// How a sweep ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No orphaned resources were found
    NothingToDelete,
    /// Orphans were listed and left alone (report-only mode)
    Listed(usize),
    /// The user declined the confirmation prompt
    Aborted(usize),
    /// Orphans were submitted for deletion
    Deleted(RunSummary),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Deleted(summary) if summary.has_failures() => EXIT_PARTIAL,
            _ => 0,
        }
    }
}

/// Execute the sweep: collect, filter, then list, confirm, or delete.
pub fn execute_sweep<S, R, W>(
    janitor: &Janitor,
    service: &mut S,
    mode: SweepMode,
    formatter: &Formatter,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome>
where
    S: ResourceService,
    S::Error: Display,
    R: BufRead,
    W: Write,
{
    let mut orphans = janitor.scan(service)?;

    if orphans.is_empty() {
        writeln!(out, "{}", formatter.nothing_to_delete())?;
        return Ok(Outcome::NothingToDelete);
    }

    writeln!(out, "{}", formatter.orphan_list(&orphans))?;

    match mode {
        SweepMode::ReportOnly => return Ok(Outcome::Listed(orphans.len())),
        SweepMode::Interactive => {
            if !confirm(input, out)? {
                writeln!(out, "{}", formatter.aborted())?;
                return Ok(Outcome::Aborted(orphans.len()));
            }
        }
        SweepMode::AutoDelete => {}
    }

    let summary = janitor.delete_orphans(service, &mut orphans);
    writeln!(out, "{}", formatter.run_summary(&summary))?;

    Ok(Outcome::Deleted(summary))
}

/// Ask before deleting.
///
/// Only an exact `yes` or `Yes` answer confirms; end of input declines.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{}", CONFIRM_PROMPT)?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        // no trailing newline was printed by the prompt
        writeln!(out)?;
        return Ok(false);
    }

    let answer = answer.trim_end_matches(['\r', '\n']);
    Ok(answer == "yes" || answer == "Yes")
}
