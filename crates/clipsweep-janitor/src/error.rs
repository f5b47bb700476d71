//! Error types for Janitor operations

use thiserror::Error;

/// Errors that abort a sweep stage
///
/// Deletion failures are not represented here: they are recorded per
/// resource in [`RunSummary`](crate::RunSummary).
#[derive(Error, Debug)]
pub enum JanitorError {
    /// Listing a page of resources failed (transport or service error)
    #[error("Failed to list resources (page {page}): {message}")]
    Collect {
        /// Page being fetched
        page: u32,
        /// Underlying error text
        message: String,
    },

    /// Looking up the notes of a resource failed
    #[error("Failed to look up notes for resource {id}: {message}")]
    Filter {
        /// Resource being checked
        id: String,
        /// Underlying error text
        message: String,
    },

    /// The listing kept reporting more pages past the configured cap
    #[error("Resource listing did not finish within {max_pages} pages")]
    PageLimit {
        /// Configured cap
        max_pages: u32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
