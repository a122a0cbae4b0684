//! Store directory names and discovery

use std::path::{Path, PathBuf};

use crate::error::{InkpostError, Result};

/// Store directory created under the project root
pub const DEFAULT_STORE_DIR: &str = ".inkpost";

/// Config file inside the store directory
pub const CONFIG_FILE: &str = "config.toml";

/// Find a store by walking up from `root` until a `.inkpost/` directory is found
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(InkpostError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
