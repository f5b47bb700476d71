//! Output formatting for the CLI.

use clipsweep_domain::ResourceSet;
use clipsweep_janitor::RunSummary;
use colored::*;

/// Confirmation question shown before deleting.
pub const CONFIRM_PROMPT: &str = "delete these resources? [Yes/no]: ";

/// Output formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Message for a run that found nothing to delete.
    pub fn nothing_to_delete(&self) -> String {
        self.colorize("no unused attachments", "green")
    }

    /// List of orphaned resources, with sizes where known.
    pub fn orphan_list(&self, orphans: &ResourceSet) -> String {
        let mut lines = vec![self.colorize("unused attachments:", "yellow")];

        for (id, size) in orphans.iter() {
            match size {
                Some(bytes) => lines.push(format!("  - {} ({} bytes)", id, bytes)),
                None => lines.push(format!("  - {}", id)),
            }
        }

        lines.push("view these attachments in 'Tools > Note attachments'".to_string());
        lines.join("\n")
    }

    /// Message when the user declines the prompt.
    pub fn aborted(&self) -> String {
        self.colorize("aborted, nothing deleted", "blue")
    }

    /// Deletion summary: headline plus one line per failure.
    pub fn run_summary(&self, summary: &RunSummary) -> String {
        let mut lines = vec![self.colorize(
            &format!(
                "{} resource(s) ({} bytes) have been deleted.",
                summary.deleted, summary.reclaimed_bytes
            ),
            "green",
        )];

        for failure in &summary.failures {
            lines.push(self.colorize(&format!("fail to delete: {}", failure.id), "red"));
        }

        lines.join("\n")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("Error: {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
