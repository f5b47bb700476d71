//! Resource module - attachments and the per-run working set

use std::collections::BTreeMap;
use std::fmt;

/// Opaque identifier of a stored attachment
///
/// Assigned by the note service and never changed afterwards. The value is
/// treated as an uninterpreted string; ordering is plain lexicographic order,
/// which matches the service's `order_by=id` listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wrap a raw identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use clipsweep_domain::ResourceId;
    ///
    /// let id = ResourceId::new("0a1b2c");
    /// assert_eq!(id.as_str(), "0a1b2c");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the raw string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One listed resource: its identifier and, when the service reported it, its size in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Resource identifier
    pub id: ResourceId,

    /// Size in bytes, if known
    pub size: Option<u64>,
}

impl ResourceEntry {
    /// Create an entry
    pub fn new(id: impl Into<ResourceId>, size: Option<u64>) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }
}

/// Working set of resources for a single run
///
/// Built by the collector, narrowed by the reference filter and drained by
/// the deletion executor. Iteration follows identifier order.
///
/// # Examples
///
/// ```
/// use clipsweep_domain::{ResourceEntry, ResourceSet};
///
/// let mut set: ResourceSet = vec![
///     ResourceEntry::new("b", Some(10)),
///     ResourceEntry::new("a", None),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.total_size(), 10);
/// assert_eq!(set.pop_first().map(|e| e.id.into_inner()), Some("a".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSet {
    entries: BTreeMap<ResourceId, Option<u64>>,
}

impl ResourceSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource, overwriting any previously recorded size for the same id
    pub fn insert(&mut self, entry: ResourceEntry) {
        self.entries.insert(entry.id, entry.size);
    }

    /// Remove a resource, returning whether it was present
    pub fn remove(&mut self, id: &ResourceId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Whether the set holds the given id
    pub fn contains(&self, id: &ResourceId) -> bool {
        self.entries.contains_key(id)
    }

    /// Recorded size of a resource (`None` if absent or unknown)
    pub fn size_of(&self, id: &ResourceId) -> Option<u64> {
        self.entries.get(id).copied().flatten()
    }

    /// Number of resources in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over identifiers in order
    pub fn ids(&self) -> impl Iterator<Item = &ResourceId> {
        self.entries.keys()
    }

    /// Iterate over `(id, size)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceId, Option<u64>)> {
        self.entries.iter().map(|(id, size)| (id, *size))
    }

    /// Sum of all known sizes; resources without a size count as zero
    pub fn total_size(&self) -> u64 {
        self.entries.values().flatten().sum()
    }

    /// Remove and return the entry with the smallest id
    pub fn pop_first(&mut self) -> Option<ResourceEntry> {
        self.entries
            .pop_first()
            .map(|(id, size)| ResourceEntry { id, size })
    }
}

impl FromIterator<ResourceEntry> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = ResourceEntry>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<ResourceEntry> for ResourceSet {
    fn extend<I: IntoIterator<Item = ResourceEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}
