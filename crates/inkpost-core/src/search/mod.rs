//! Ranked merge search over posts
//!
//! A search queries two independently ranked indexes, title first and body
//! second, and merges them into one deduplicated list bounded by `limit`:
//! - Title matches always precede body-only matches
//! - Relevance order inside each index is kept as the index returned it
//! - The body index is only queried when title matches leave room
//!
//! The index itself is an injected capability ([`DocumentIndex`]), so the
//! merge runs the same against SQLite ([`crate::db::Database`]) or the
//! in-memory double in [`memory`].

pub mod memory;

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use crate::error::SearchError;

/// A document as seen by a search index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableDocument {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// One merged search hit. Carries no score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl From<SearchableDocument> for SearchResult {
    fn from(doc: SearchableDocument) -> Self {
        SearchResult {
            id: doc.id,
            title: doc.title,
            body: doc.body,
        }
    }
}

/// The two ranked indexes a search draws from, in merge priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchIndex {
    Title,
    Body,
}

impl SearchIndex {
    /// Index name as configured in the document store
    pub const fn name(self) -> &'static str {
        match self {
            SearchIndex::Title => "search_title",
            SearchIndex::Body => "search_body",
        }
    }

    /// Document field the index covers
    pub const fn field(self) -> &'static str {
        match self {
            SearchIndex::Title => "title",
            SearchIndex::Body => "body",
        }
    }
}

impl fmt::Display for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ranked text lookup over a single document field.
///
/// Implementations return at most `limit` documents, best match first.
/// Any failure must be reported as [`SearchError::IndexUnavailable`].
pub trait DocumentIndex {
    fn query_by_index(
        &self,
        index: SearchIndex,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchableDocument>, SearchError>;
}

impl<T: DocumentIndex + ?Sized> DocumentIndex for &T {
    fn query_by_index(
        &self,
        index: SearchIndex,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchableDocument>, SearchError> {
        (**self).query_by_index(index, term, limit)
    }
}

/// Caller-facing search request, `{ "term": ..., "limit": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub term: String,
    pub limit: i64,
}

impl SearchRequest {
    /// Run this request against an index
    pub fn run<I: DocumentIndex + ?Sized>(
        &self,
        index: &I,
    ) -> Result<Vec<SearchResult>, SearchError> {
        search_posts(index, &self.term, self.limit)
    }
}

/// Validate search arguments before any index is touched
fn validate(term: &str, limit: i64) -> Result<usize, SearchError> {
    if term.trim().is_empty() {
        return Err(SearchError::InvalidArgument(
            "search term must not be empty".to_string(),
        ));
    }
    if limit <= 0 {
        return Err(SearchError::InvalidArgument(format!(
            "limit must be positive, got {}",
            limit
        )));
    }
    usize::try_from(limit)
        .map_err(|_| SearchError::InvalidArgument(format!("limit out of range: {}", limit)))
}

/// Append unseen documents to `results` until it holds `limit` entries
fn merge_into(
    results: &mut Vec<SearchResult>,
    seen: &mut HashSet<String>,
    docs: Vec<SearchableDocument>,
    limit: usize,
) {
    for doc in docs {
        if results.len() >= limit {
            break;
        }
        if !seen.insert(doc.id.clone()) {
            continue;
        }
        results.push(SearchResult::from(doc));
    }
}

/// Search posts by title, then by body, merging into at most `limit` results.
#[tracing::instrument(skip(index), level = "debug")]
pub fn search_posts<I: DocumentIndex + ?Sized>(
    index: &I,
    term: &str,
    limit: i64,
) -> Result<Vec<SearchResult>, SearchError> {
    let start = Instant::now();
    let limit = validate(term, limit)?;

    let mut results = Vec::with_capacity(limit);
    let mut seen = HashSet::new();

    let title_matches = index.query_by_index(SearchIndex::Title, term, limit)?;
    debug!(count = title_matches.len(), elapsed = ?start.elapsed(), "title_matches");
    merge_into(&mut results, &mut seen, title_matches, limit);

    if results.len() < limit {
        let body_matches = index.query_by_index(SearchIndex::Body, term, limit)?;
        debug!(count = body_matches.len(), elapsed = ?start.elapsed(), "body_matches");
        merge_into(&mut results, &mut seen, body_matches, limit);
    }

    debug!(result_count = results.len(), elapsed = ?start.elapsed(), "search");
    Ok(results)
}
