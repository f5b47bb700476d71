//! Trait definitions for external interactions
//!
//! These traits define the boundary between the sweep pipeline and the
//! remote note service. Infrastructure implementations live in other crates.

use crate::{ResourceEntry, ResourceId};

/// Parameters of one page of the resource listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u32,

    /// Maximum items per page (the service caps this at 100)
    pub limit: u32,

    /// Ask the service to include each resource's size
    pub with_sizes: bool,
}

impl ListQuery {
    /// First page with the given page size
    pub fn first(limit: u32, with_sizes: bool) -> Self {
        Self {
            page: 1,
            limit,
            with_sizes,
        }
    }

    /// The page after this one
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }
}

/// One page of the resource listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePage {
    /// Resources on this page
    pub resources: Vec<ResourceEntry>,

    /// Whether the service has further pages
    pub has_more: bool,
}

/// Access to the note service's resource endpoints
///
/// Implemented by the infrastructure layer (clipsweep-client). Errors cover
/// both transport failures and failures reported by the service itself.
pub trait ResourceService {
    /// Error type for service operations
    type Error;

    /// Fetch one page of resources, ordered by id
    fn list_resources(&self, query: ListQuery) -> Result<ResourcePage, Self::Error>;

    /// Ids of the notes that reference a resource
    fn referencing_notes(&self, id: &ResourceId) -> Result<Vec<String>, Self::Error>;

    /// Delete a resource
    fn delete_resource(&mut self, id: &ResourceId) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_paging() {
        let query = ListQuery::first(100, true);
        assert_eq!(query.page, 1);

        let next = query.next().next();
        assert_eq!(next.page, 3);
        assert_eq!(next.limit, 100);
        assert!(next.with_sizes);
    }
}
