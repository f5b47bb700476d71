//! clipsweep Domain Layer
//!
//! Core vocabulary shared by every clipsweep crate. It has no external
//! dependencies and performs no IO.
//!
//! ## Key Concepts
//!
//! - **Resource**: a binary attachment stored by the note service, keyed by an opaque [`ResourceId`]
//! - **Resource set**: the working set of candidate orphans for a single run ([`ResourceSet`])
//! - **Resource service**: the boundary to the remote note service ([`ResourceService`])
//!
//! ## Architecture
//!
//! The pipeline in `clipsweep-janitor` is written against [`ResourceService`] only;
//! the HTTP implementation lives in `clipsweep-client`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod resource;
pub mod traits;

// Re-exports for convenience
pub use resource::{ResourceEntry, ResourceId, ResourceSet};
pub use traits::{ListQuery, ResourcePage, ResourceService};
