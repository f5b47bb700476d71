//! clipsweep Janitor
//!
//! Finds and deletes attachments that no note references anymore.
//!
//! # Overview
//!
//! A sweep runs three stages against a [`ResourceService`](clipsweep_domain::ResourceService):
//! - **Collection**: page through the resource listing (100 per page, ordered by id)
//! - **Reference filtering**: ask, per resource, which notes use it; keep only the unused ones
//! - **Deletion**: delete each orphan, recording successes, reclaimed bytes, and failures
//!
//! Requests are issued one at a time. Collection and filtering stop at the
//! first error; deletion records failures per resource and carries on.
//! Between filtering and deletion a note could start using a resource; the
//! sweep does not guard against that race.
//!
//! # Usage
//!
//! ```no_run
//! use clipsweep_client::{ClientConfig, ClipperClient};
//! use clipsweep_janitor::{Janitor, JanitorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = ClipperClient::new(ClientConfig::localhost(41184, "token"))?;
//! let janitor = Janitor::new(JanitorConfig::default())?;
//!
//! let mut orphans = janitor.collect(&client)?;
//! janitor.filter_referenced(&client, &mut orphans)?;
//!
//! let summary = janitor.delete_orphans(&mut client, &mut orphans);
//! println!("{}", summary.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`JanitorConfig`] deserializes from TOML or JSON; missing keys take their defaults:
//!
//! ```toml
//! page_size = 100
//! fetch_sizes = true
//! max_pages = 10000
//! dry_run = false
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod janitor;
mod summary;

pub use config::{JanitorConfig, MAX_PAGE_SIZE};
pub use error::JanitorError;
pub use janitor::Janitor;
pub use summary::{FailedDeletion, RunSummary};
