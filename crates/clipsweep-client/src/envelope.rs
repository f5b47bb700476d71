//! Response envelope shared by every resource endpoint.

use crate::error::ClientError;
use clipsweep_domain::ResourceEntry;
use serde::Deserialize;

/// An item in an envelope: a resource or a note
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Resource or note id
    pub id: String,

    /// Size in bytes (resources only, when requested via `fields`)
    #[serde(default)]
    pub size: Option<u64>,
}

/// Common JSON body returned by the service
///
/// The listing, the referencing-notes lookup and deletion all answer with
/// this shape. Every field is optional on the wire; a successful delete
/// answers with an empty body, which decodes to [`Envelope::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    /// Error message; absent, null or empty on success
    #[serde(default)]
    pub error: Option<String>,

    /// Result items
    #[serde(default)]
    pub items: Vec<Item>,

    /// Whether further pages exist
    #[serde(default)]
    pub has_more: bool,
}

impl Envelope {
    /// The service-reported error, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    /// Turn a service-reported error into [`ClientError::Service`]
    pub fn into_result(self) -> Result<Self, ClientError> {
        match self.error_message() {
            Some(message) => Err(ClientError::Service(message.to_string())),
            None => Ok(self),
        }
    }

    /// Items as resource entries
    pub fn into_resources(self) -> Vec<ResourceEntry> {
        self.items
            .into_iter()
            .map(|item| ResourceEntry::new(item.id, item.size))
            .collect()
    }
}
