//! Post and comment records

use serde::{Deserialize, Serialize};

/// A published blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_id: String,
    /// Opaque reference to an image held by an external file store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_storage_id: Option<String>,
    /// Creation time, RFC 3339 UTC
    pub created: String,
}

/// Fields supplied when creating a post
#[derive(Debug, Clone, Default)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub body: &'a str,
    /// Explicit author; falls back to the configured default author
    pub author_id: Option<&'a str>,
    pub image_storage_id: Option<&'a str>,
}

/// A comment left on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub author_name: String,
    pub body: String,
    pub created: String,
}

/// Fields supplied when commenting on a post
#[derive(Debug, Clone, Default)]
pub struct NewComment<'a> {
    pub post_id: &'a str,
    pub body: &'a str,
    pub author_id: Option<&'a str>,
    /// Display name; defaults to the author id
    pub author_name: Option<&'a str>,
}
