//! Configuration type definitions

use crate::id::IdScheme;
use serde::{Deserialize, Serialize};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// ID generation scheme
    #[serde(default)]
    pub id_scheme: IdScheme,

    /// Author used when a command is not given one explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_author: Option<String>,

    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for search requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result limit when none is requested (default 10)
    #[serde(default = "default_search_limit")]
    pub default_limit: i64,

    /// Largest limit a caller may request (default 100)
    #[serde(default = "default_max_limit")]
    pub max_limit: i64,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_search_limit() -> i64 {
    10
}

fn default_max_limit() -> i64 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_limit: default_search_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            id_scheme: IdScheme::default(),
            default_author: None,
            search: SearchConfig::default(),
        }
    }
}
