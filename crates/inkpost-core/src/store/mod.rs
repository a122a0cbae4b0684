//! Store management for inkpost
//!
//! The store is a directory (default `.inkpost/`) holding `config.toml` and
//! the SQLite database with posts, comments and their search index.

mod ops;
pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_usage;
use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{InkpostError, Result};
use crate::id::IdScheme;
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// Options for store initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// ID scheme written to a new config (ignored when the config exists)
    pub id_scheme: Option<IdScheme>,
    /// Default author written to the config
    pub default_author: Option<String>,
}

/// The inkpost store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// SQLite database
    db: Database,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(InkpostError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        let db = Database::open(path)?;

        Ok(Store {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path, options: InitOptions) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR), options)
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Idempotent: an existing config is kept, only an explicitly given
    /// default author is written into it. Asking for a different ID scheme
    /// than the existing store uses is a usage error.
    pub fn init_at(store_root: &Path, options: InitOptions) -> Result<Self> {
        fs::create_dir_all(store_root)?;

        let config_path = store_root.join(CONFIG_FILE);
        let config_existed = config_path.exists();
        let mut config = if config_existed {
            let existing = StoreConfig::load(&config_path)?;
            if let Some(scheme) = options.id_scheme {
                if scheme != existing.id_scheme {
                    bail_usage!(format!(
                        "store already uses the {:?} ID scheme",
                        existing.id_scheme
                    ));
                }
            }
            existing
        } else {
            StoreConfig {
                id_scheme: options.id_scheme.unwrap_or_default(),
                ..StoreConfig::default()
            }
        };

        if options.default_author.is_some() {
            config.default_author = options.default_author.clone();
        }

        if !config_existed || options.default_author.is_some() {
            config.save(&config_path)?;
        }

        let db = Database::open(store_root)?;
        tracing::info!(store = %store_root.display(), "store initialized");

        Ok(Store {
            root: store_root.to_path_buf(),
            config,
            db,
        })
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the database
    pub fn db(&self) -> &Database {
        &self.db
    }
}
