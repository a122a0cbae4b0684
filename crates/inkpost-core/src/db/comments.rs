//! Comment rows

use crate::error::{InkpostError, Result};
use crate::map_db_err;
use crate::post::Comment;
use rusqlite::{params, Row};

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        post_id: row.get(1)?,
        author_id: row.get(2)?,
        author_name: row.get(3)?,
        body: row.get(4)?,
        created: row.get(5)?,
    })
}

impl super::Database {
    pub fn insert_comment(&self, comment: &Comment) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO comments (id, post_id, author_id, author_name, body, created) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    comment.id,
                    comment.post_id,
                    comment.author_id,
                    comment.author_name,
                    comment.body,
                    comment.created,
                ],
            )
            .map_err(|e| map_db_err!("insert comment", e))?;
        Ok(())
    }

    /// Comments on a post, oldest first
    pub fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, post_id, author_id, author_name, body, created
                 FROM comments WHERE post_id = ?1 ORDER BY created ASC, seq ASC",
            )
            .map_err(|e| map_db_err!("prepare list comments", e))?;

        let rows = stmt
            .query_map(params![post_id], comment_from_row)
            .map_err(|e| map_db_err!("list comments", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| InkpostError::field_extraction("comment", e))
    }

    pub fn comment_exists(&self, id: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM comments WHERE id = ?1)",
                params![id],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("check comment exists", e))
    }
}
