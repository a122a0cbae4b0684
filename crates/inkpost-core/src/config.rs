//! Store configuration for inkpost
//!
//! Configuration is stored in `.inkpost/config.toml`. Every field has a
//! default, so a missing or partial file is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{InkpostError, Result};

pub use types::{SearchConfig, StoreConfig, STORE_FORMAT_VERSION};

impl StoreConfig {
    /// Resolve the acting author: explicit value first, then `default_author`
    pub fn resolve_author(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .or(self.default_author.as_deref())
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .ok_or(InkpostError::MissingAuthor)
    }

    /// Resolve the search limit: explicit value first, then `search.default_limit`.
    ///
    /// Limits above `search.max_limit` are rejected. Non-positive limits are
    /// passed through so the search itself reports them.
    pub fn resolve_search_limit(&self, explicit: Option<i64>) -> Result<i64> {
        let limit = explicit.unwrap_or(self.search.default_limit);
        if limit > self.search.max_limit {
            return Err(InkpostError::invalid_value(
                "search limit",
                format!("{} (max {})", limit, self.search.max_limit),
            ));
        }
        Ok(limit)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(InkpostError::InvalidStore {
                reason: format!(
                    "store format version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InkpostError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
