//! clipsweep HTTP client
//!
//! Blocking client for the note service's local REST API (the Web Clipper
//! service). It implements [`ResourceService`] so the sweep pipeline can run
//! against the live service.
//!
//! # Example
//!
//! ```no_run
//! use clipsweep_client::{ClientConfig, ClipperClient, ResourceService};
//! use clipsweep_domain::ListQuery;
//!
//! let client = ClipperClient::new(ClientConfig::localhost(41184, "my-token"))
//!     .expect("Failed to build client");
//!
//! let page = client
//!     .list_resources(ListQuery::first(100, true))
//!     .expect("Failed to list resources");
//! println!("{} resources on page 1", page.resources.len());
//! ```

#![warn(missing_docs)]

mod client;
mod envelope;
mod error;
mod transport;

pub use client::{ClientConfig, ClipperClient, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
pub use clipsweep_domain::ResourceService;
pub use envelope::{Envelope, Item};
pub use error::ClientError;
