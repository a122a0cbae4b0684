//! SQLite database schema for inkpost

use rusqlite::{params, Connection, OptionalExtension, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Schema is current
    Ok,
    /// Database was written by a newer inkpost
    TooNew(i32),
}

const SCHEMA_SQL: &str = r#"
-- Posts; seq doubles as the FTS rowid
CREATE TABLE IF NOT EXISTS posts (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    author_id TEXT NOT NULL,
    image_storage_id TEXT,
    created TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_posts_created ON posts(created);

-- Full-text search over posts: the `title` column backs the search_title
-- index, the `body` column backs search_body
CREATE VIRTUAL TABLE IF NOT EXISTS posts_fts USING fts5(
    title,
    body,
    tokenize='porter unicode61'
);

-- Comments
CREATE TABLE IF NOT EXISTS comments (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    post_id TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    author_id TEXT NOT NULL,
    author_name TEXT NOT NULL,
    body TEXT NOT NULL,
    created TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_comments_post ON comments(post_id);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    conn.execute_batch(SCHEMA_SQL)?;

    let stored: Option<String> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get(0),
        )
        .optional()?;

    match stored.and_then(|v| v.parse::<i32>().ok()) {
        Some(version) if version > CURRENT_SCHEMA_VERSION => {
            return Ok(SchemaCreateResult::TooNew(version))
        }
        Some(_) => {}
        None => {
            conn.execute(
                "INSERT OR REPLACE INTO store_meta (key, value) VALUES ('schema_version', ?1)",
                params![CURRENT_SCHEMA_VERSION.to_string()],
            )?;
        }
    }

    Ok(SchemaCreateResult::Ok)
}
