//! Outcome of the deletion stage

use clipsweep_domain::ResourceId;

/// A resource that could not be deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDeletion {
    /// Resource that was not deleted
    pub id: ResourceId,

    /// Service message or transport error text
    pub reason: String,
}

/// Counters collected while deleting orphaned resources
///
/// Invariant: `deleted + failures.len()` equals the number of resources
/// submitted, and `reclaimed_bytes` is the sum of the recorded sizes of the
/// deleted ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Resources deleted
    pub deleted: usize,

    /// Bytes reclaimed by the deletions (resources of unknown size count as zero)
    pub reclaimed_bytes: u64,

    /// Resources whose deletion failed, in processing order
    pub failures: Vec<FailedDeletion>,
}

impl RunSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful deletion
    pub fn record_deletion(&mut self, size: Option<u64>) {
        self.deleted += 1;
        self.reclaimed_bytes += size.unwrap_or(0);
    }

    /// Record a failed deletion
    pub fn record_failure(&mut self, id: ResourceId, reason: impl Into<String>) {
        self.failures.push(FailedDeletion {
            id,
            reason: reason.into(),
        });
    }

    /// Resources submitted for deletion
    pub fn attempted(&self) -> usize {
        self.deleted + self.failures.len()
    }

    /// Whether any deletion failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Human-readable report
    ///
    /// One headline followed by a `fail to delete: <id>` line per failure.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "{} resource(s) ({} bytes) have been deleted.",
            self.deleted, self.reclaimed_bytes
        )];

        for failure in &self.failures {
            lines.push(format!("fail to delete: {}", failure.id));
        }

        lines.join("\n")
    }
}
