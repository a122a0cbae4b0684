//! SQLite database module for inkpost
//!
//! Holds posts, comments and the FTS5 table behind both search indexes.

mod comments;
mod posts;
mod schema;
mod search;

use crate::error::{InkpostError, Result};
use rusqlite::Connection;
use std::path::Path;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// Database file name inside the store directory
pub const DB_FILE: &str = "inkpost.db";

/// SQLite database for inkpost
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);

        let conn = Connection::open(&db_path).map_err(|e| {
            InkpostError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| InkpostError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| InkpostError::Other(format!("failed to open database: {}", e)))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| InkpostError::Other(format!("failed to enable foreign keys: {}", e)))?;

        match create_schema(&conn)
            .map_err(|e| InkpostError::Other(format!("failed to create database schema: {}", e)))?
        {
            SchemaCreateResult::Ok => Ok(Database { conn }),
            SchemaCreateResult::TooNew(version) => Err(InkpostError::InvalidStore {
                reason: format!(
                    "database schema version {} is newer than supported version {}",
                    version, CURRENT_SCHEMA_VERSION
                ),
            }),
        }
    }

    pub fn get_post_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM posts", [], |r| r.get(0))
            .map_err(|e| InkpostError::db_operation("get post count", e))
    }

    pub fn get_comment_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM comments", [], |r| r.get(0))
            .map_err(|e| InkpostError::db_operation("get comment count", e))
    }

    pub fn get_schema_version(&self) -> Result<i32> {
        self.conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(CURRENT_SCHEMA_VERSION))
                },
            )
            .map_err(|e| InkpostError::db_operation("get schema version", e))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Checkpoint so rapid sequential CLI invocations see committed data
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
