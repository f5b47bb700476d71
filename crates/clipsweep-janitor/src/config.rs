//! Configuration for Janitor operations
//!
//! Defines listing page size, size tracking, and the dry-run switch.

use crate::JanitorError;
use serde::{Deserialize, Serialize};

/// Largest page size the service accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration for a sweep
///
/// # Examples
///
/// ```
/// use clipsweep_janitor::JanitorConfig;
///
/// let config = JanitorConfig::default();
/// assert_eq!(config.page_size, 100);
/// assert!(config.fetch_sizes);
/// assert!(!config.dry_run);
///
/// let config = JanitorConfig::dry_run();
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JanitorConfig {
    /// Resources requested per listing page
    /// Default: 100 (the service maximum)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request resource sizes so the summary can report reclaimed bytes
    /// Default: true
    #[serde(default = "default_true")]
    pub fetch_sizes: bool,

    /// Abort collection if the listing is still not finished after this many pages
    /// Default: 10 000 (one million resources)
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Dry-run mode: log what would be deleted without issuing deletes
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,
}

fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

fn default_max_pages() -> u32 {
    10_000
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            fetch_sizes: true,
            max_pages: default_max_pages(),
            dry_run: false,
        }
    }
}

impl JanitorConfig {
    /// Default configuration with dry-run enabled
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    /// Check the configuration before any request is made
    pub fn validate(&self) -> Result<(), JanitorError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(JanitorError::Config(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }
        if self.max_pages == 0 {
            return Err(JanitorError::Config("max_pages must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JanitorConfig::default();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_pages, 10_000);
        assert!(config.fetch_sizes);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_page_size_bounds() {
        let zero = JanitorConfig {
            page_size: 0,
            ..Default::default()
        };
        let too_big = JanitorConfig {
            page_size: 101,
            ..Default::default()
        };

        assert!(matches!(zero.validate(), Err(JanitorError::Config(_))));
        assert!(matches!(too_big.validate(), Err(JanitorError::Config(_))));
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let config = JanitorConfig {
            max_pages: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: JanitorConfig = serde_json::from_str(r#"{"dry_run": true}"#).unwrap();
        assert_eq!(config.page_size, 100);
        assert!(config.fetch_sizes);
        assert!(config.dry_run);
    }
}
