//! FTS5-backed search indexes
//!
//! `search_title` and `search_body` are column-filtered queries over the same
//! `posts_fts` table, ranked by BM25 (best first).

use std::time::Instant;

use rusqlite::params;

use crate::search::{DocumentIndex, SearchError, SearchIndex, SearchableDocument};
use crate::trace_time;

/// Build an FTS5 match expression for `term` restricted to one column.
///
/// Each whitespace-separated token is quoted so punctuation is never read as
/// FTS5 syntax. Tokens are OR-ed and the last one matches as a prefix.
/// Returns `None` when the term has no tokens.
pub(crate) fn match_expression(field: &str, term: &str) -> Option<String> {
    let tokens: Vec<String> = term
        .split_whitespace()
        .map(|t| format!("\"{}\"", t.replace('"', "\"\"")))
        .collect();

    let (last, rest) = tokens.split_last()?;

    let mut parts: Vec<String> = rest.to_vec();
    parts.push(format!("{}*", last));

    Some(format!("{} : ({})", field, parts.join(" OR ")))
}

impl super::Database {
    fn query_fts(
        &self,
        index: SearchIndex,
        expression: &str,
        limit: usize,
    ) -> rusqlite::Result<Vec<SearchableDocument>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT p.id, p.title, p.body
             FROM posts_fts
             JOIN posts p ON p.seq = posts_fts.rowid
             WHERE posts_fts MATCH ?1
             ORDER BY bm25(posts_fts) ASC, p.seq ASC
             LIMIT ?2",
        )?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = stmt.query_map(params![expression, limit], |row| {
            Ok(SearchableDocument {
                id: row.get(0)?,
                title: row.get(1)?,
                body: row.get(2)?,
            })
        })?;

        let docs = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::trace!(index = index.name(), count = docs.len(), "query_fts");
        Ok(docs)
    }
}

impl DocumentIndex for super::Database {
    fn query_by_index(
        &self,
        index: SearchIndex,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchableDocument>, SearchError> {
        let start = Instant::now();

        let Some(expression) = match_expression(index.field(), term) else {
            return Ok(Vec::new());
        };

        let docs = self
            .query_fts(index, &expression, limit)
            .map_err(|e| SearchError::unavailable(index, e))?;

        trace_time!(start, "query_by_index", index = index.name());
        Ok(docs)
    }
}
