//! Post rows and their full-text entries

use crate::error::{InkpostError, Result};
use crate::map_db_err;
use crate::post::Post;
use rusqlite::{params, OptionalExtension, Row};

const POST_COLUMNS: &str = "id, title, body, author_id, image_storage_id, created";

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        author_id: row.get(3)?,
        image_storage_id: row.get(4)?,
        created: row.get(5)?,
    })
}

impl super::Database {
    /// Insert a post and its search entry in one transaction
    pub fn insert_post(&self, post: &Post) -> Result<()> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| InkpostError::db_operation("begin insert post transaction", e))?;

        tx.execute(
            "INSERT INTO posts (id, title, body, author_id, image_storage_id, created) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                post.id,
                post.title,
                post.body,
                post.author_id,
                post.image_storage_id,
                post.created,
            ],
        )
        .map_err(|e| map_db_err!("insert post", e))?;

        let rowid = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO posts_fts(rowid, title, body) VALUES (?1, ?2, ?3)",
            params![rowid, post.title, post.body],
        )
        .map_err(|e| map_db_err!("index post", e))?;

        tx.commit()
            .map_err(|e| map_db_err!("commit insert post transaction", e))?;

        Ok(())
    }

    /// All posts, newest first
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        let sql = format!(
            "SELECT {} FROM posts ORDER BY created DESC, seq DESC",
            POST_COLUMNS
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| map_db_err!("prepare list posts", e))?;

        let rows = stmt
            .query_map([], post_from_row)
            .map_err(|e| map_db_err!("list posts", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| InkpostError::field_extraction("post", e))
    }

    /// Look up a single post; `None` when no post has this id
    pub fn get_post(&self, id: &str) -> Result<Option<Post>> {
        let sql = format!("SELECT {} FROM posts WHERE id = ?1", POST_COLUMNS);
        self.conn
            .query_row(&sql, params![id], post_from_row)
            .optional()
            .map_err(|e| map_db_err!("get post", e))
    }

    pub fn post_exists(&self, id: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1)",
                params![id],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("check post exists", e))
    }
}
