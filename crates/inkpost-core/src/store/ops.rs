//! Post, comment and search operations on a store

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::bail_invalid;
use crate::error::{InkpostError, Result};
use crate::id::{IdKind, RecordId};
use crate::post::{Comment, NewComment, NewPost, Post};
use crate::search::{self, SearchResult};

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn require_text(context: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail_invalid!(context, "must not be empty");
    }
    Ok(trimmed.to_string())
}

impl super::Store {
    /// Create a post. The author falls back to the configured default.
    pub fn create_post(&self, new: NewPost<'_>) -> Result<Post> {
        let author_id = self.config.resolve_author(new.author_id)?;
        let title = require_text("title", new.title)?;
        let body = require_text("body", new.body)?;
        let image_storage_id = new
            .image_storage_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let id = RecordId::generate(self.config.id_scheme, IdKind::Post, &title, |candidate| {
            self.db.post_exists(candidate)
        })?;

        let post = Post {
            id: id.into_string(),
            title,
            body,
            author_id,
            image_storage_id,
            created: now(),
        };

        self.db.insert_post(&post)?;
        debug!(post_id = %post.id, "create_post");
        Ok(post)
    }

    /// All posts, newest first
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        self.db.list_posts()
    }

    /// Look up a post by id; `None` when it does not exist
    pub fn get_post(&self, id: &str) -> Result<Option<Post>> {
        let id = RecordId::parse(IdKind::Post, id)?;
        self.db.get_post(id.as_str())
    }

    /// Add a comment to an existing post
    pub fn create_comment(&self, new: NewComment<'_>) -> Result<Comment> {
        let post_id = RecordId::parse(IdKind::Post, new.post_id)?;
        let author_id = self.config.resolve_author(new.author_id)?;
        let body = require_text("comment body", new.body)?;

        if !self.db.post_exists(post_id.as_str())? {
            return Err(InkpostError::not_found("post", post_id));
        }

        let author_name = new
            .author_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| author_id.clone());

        let id = RecordId::generate(self.config.id_scheme, IdKind::Comment, &body, |candidate| {
            self.db.comment_exists(candidate)
        })?;

        let comment = Comment {
            id: id.into_string(),
            post_id: post_id.into_string(),
            author_id,
            author_name,
            body,
            created: now(),
        };

        self.db.insert_comment(&comment)?;
        debug!(comment_id = %comment.id, post_id = %comment.post_id, "create_comment");
        Ok(comment)
    }

    /// Comments on a post, oldest first
    pub fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        let post_id = RecordId::parse(IdKind::Post, post_id)?;
        if !self.db.post_exists(post_id.as_str())? {
            return Err(InkpostError::not_found("post", post_id));
        }
        self.db.list_comments(post_id.as_str())
    }

    /// Ranked merge search over post titles and bodies.
    ///
    /// `limit` defaults to the configured `search.default_limit`.
    pub fn search(&self, term: &str, limit: Option<i64>) -> Result<Vec<SearchResult>> {
        let limit = self.config.resolve_search_limit(limit)?;
        Ok(search::search_posts(&self.db, term, limit)?)
    }
}
