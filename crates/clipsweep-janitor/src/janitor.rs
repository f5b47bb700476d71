//! Core Janitor implementation: collect, filter, delete

use crate::{JanitorConfig, JanitorError, RunSummary};
use clipsweep_domain::{ListQuery, ResourceId, ResourceService, ResourceSet};
use std::fmt::Display;

/// Sweep pipeline for orphaned attachments
///
/// Each stage takes the service explicitly and works on a [`ResourceSet`]
/// owned by the caller:
///
/// 1. [`collect`](Janitor::collect) pages through every resource
/// 2. [`filter_referenced`](Janitor::filter_referenced) drops resources that any note uses
/// 3. [`delete_orphans`](Janitor::delete_orphans) deletes what is left
///
/// Collection and filtering abort on the first error. Deletion never aborts:
/// each resource succeeds or fails on its own.
///
/// # Examples
///
/// ```no_run
/// use clipsweep_client::{ClientConfig, ClipperClient};
/// use clipsweep_janitor::{Janitor, JanitorConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = ClipperClient::new(ClientConfig::localhost(41184, "token"))?;
/// let janitor = Janitor::new(JanitorConfig::default())?;
///
/// let mut orphans = janitor.scan(&client)?;
/// let summary = janitor.delete_orphans(&mut client, &mut orphans);
/// println!("{}", summary.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Janitor {
    config: JanitorConfig,
}

impl Janitor {
    /// Create a new Janitor with the given configuration
    pub fn new(config: JanitorConfig) -> Result<Self, JanitorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a Janitor with default configuration
    pub fn default_config() -> Self {
        Self {
            config: JanitorConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &JanitorConfig {
        &self.config
    }

    /// Collect and filter: every resource no note refers to
    pub fn scan<S>(&self, service: &S) -> Result<ResourceSet, JanitorError>
    where
        S: ResourceService,
        S::Error: Display,
    {
        let mut resources = self.collect(service)?;
        self.filter_referenced(service, &mut resources)?;
        Ok(resources)
    }

    /// Page through the whole resource listing
    ///
    /// Starts at page 1 and keeps going while the service reports more
    /// pages. Any failure discards what was gathered so far.
    pub fn collect<S>(&self, service: &S) -> Result<ResourceSet, JanitorError>
    where
        S: ResourceService,
        S::Error: Display,
    {
        let mut resources = ResourceSet::new();
        let mut query = ListQuery::first(self.config.page_size, self.config.fetch_sizes);

        loop {
            if query.page > self.config.max_pages {
                tracing::error!("Listing still has more pages after {}", self.config.max_pages);
                return Err(JanitorError::PageLimit {
                    max_pages: self.config.max_pages,
                });
            }

            let page = service.list_resources(query).map_err(|e| {
                tracing::error!("Listing page {} failed: {}", query.page, e);
                JanitorError::Collect {
                    page: query.page,
                    message: e.to_string(),
                }
            })?;

            tracing::debug!(
                "Page {}: {} resource(s), has_more={}",
                query.page,
                page.resources.len(),
                page.has_more
            );
            resources.extend(page.resources);

            if !page.has_more {
                break;
            }
            query = query.next();
        }

        tracing::info!("Collected {} resource(s) in {} page(s)", resources.len(), query.page);
        Ok(resources)
    }

    /// Remove every resource that at least one note references
    ///
    /// The pass is all-or-nothing: the set is only modified after every
    /// lookup succeeded. Returns the number of resources removed.
    pub fn filter_referenced<S>(
        &self,
        service: &S,
        resources: &mut ResourceSet,
    ) -> Result<usize, JanitorError>
    where
        S: ResourceService,
        S::Error: Display,
    {
        let mut referenced: Vec<ResourceId> = Vec::new();

        for id in resources.ids() {
            let notes = service.referencing_notes(id).map_err(|e| {
                tracing::error!("Note lookup for resource {} failed: {}", id, e);
                JanitorError::Filter {
                    id: id.to_string(),
                    message: e.to_string(),
                }
            })?;

            if !notes.is_empty() {
                tracing::debug!("Resource {} is used by {} note(s)", id, notes.len());
                referenced.push(id.clone());
            }
        }

        for id in &referenced {
            resources.remove(id);
        }

        tracing::info!(
            "{} resource(s) referenced, {} orphaned",
            referenced.len(),
            resources.len()
        );
        Ok(referenced.len())
    }

    /// Delete every resource left in the set
    ///
    /// The set is drained as resources are processed. Service-reported and
    /// transport failures are both recorded in the summary and the loop moves
    /// on to the next resource. In dry-run mode nothing is sent and the set
    /// is left untouched.
    pub fn delete_orphans<S>(&self, service: &mut S, resources: &mut ResourceSet) -> RunSummary
    where
        S: ResourceService,
        S::Error: Display,
    {
        let mut summary = RunSummary::new();

        if self.config.dry_run {
            tracing::info!(
                "DRY RUN: Would delete {} resource(s) ({} bytes)",
                resources.len(),
                resources.total_size()
            );
            return summary;
        }

        while let Some(entry) = resources.pop_first() {
            match service.delete_resource(&entry.id) {
                Ok(()) => {
                    tracing::debug!("Deleted resource {}", entry.id);
                    summary.record_deletion(entry.size);
                }
                Err(e) => {
                    tracing::warn!("Delete {} failed: {}", entry.id, e);
                    summary.record_failure(entry.id, e.to_string());
                }
            }
        }

        tracing::info!(
            "Deleted {} resource(s), {} failure(s)",
            summary.deleted,
            summary.failures.len()
        );
        summary
    }
}
