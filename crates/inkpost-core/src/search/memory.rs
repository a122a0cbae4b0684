//! In-memory document index
//!
//! Ranks documents by how often the query tokens occur in the indexed field.
//! Counts queries per index and can simulate an unavailable index, which makes
//! it the test double for anything built on [`DocumentIndex`].

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{DocumentIndex, SearchError, SearchIndex, SearchableDocument};

/// Document index held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryIndex {
    documents: Vec<SearchableDocument>,
    unavailable: Vec<SearchIndex>,
    title_queries: AtomicUsize,
    body_queries: AtomicUsize,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(id, title, body)` triples
    pub fn from_triples<'a>(docs: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let mut index = Self::new();
        for (id, title, body) in docs {
            index.insert(id, title, body);
        }
        index
    }

    pub fn insert(&mut self, id: &str, title: &str, body: &str) {
        self.documents.push(SearchableDocument {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    /// Make every query against `index` fail
    pub fn fail_index(mut self, index: SearchIndex) -> Self {
        self.unavailable.push(index);
        self
    }

    /// Number of queries issued against `index` so far
    pub fn query_count(&self, index: SearchIndex) -> usize {
        self.counter(index).load(Ordering::Relaxed)
    }

    fn counter(&self, index: SearchIndex) -> &AtomicUsize {
        match index {
            SearchIndex::Title => &self.title_queries,
            SearchIndex::Body => &self.body_queries,
        }
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn score(field: &str, query_tokens: &[String]) -> usize {
    tokenize(field)
        .filter(|token| query_tokens.iter().any(|q| q == token))
        .count()
}

impl DocumentIndex for MemoryIndex {
    fn query_by_index(
        &self,
        index: SearchIndex,
        term: &str,
        limit: usize,
    ) -> Result<Vec<SearchableDocument>, SearchError> {
        self.counter(index).fetch_add(1, Ordering::Relaxed);

        if self.unavailable.contains(&index) {
            return Err(SearchError::unavailable(index, "index offline"));
        }

        let query_tokens: Vec<String> = tokenize(term).collect();

        let mut scored: Vec<(usize, &SearchableDocument)> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let field = match index {
                    SearchIndex::Title => &doc.title,
                    SearchIndex::Body => &doc.body,
                };
                let s = score(field, &query_tokens);
                (s > 0).then_some((s, doc))
            })
            .collect();

        // Stable sort keeps insertion order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, doc)| doc.clone())
            .collect())
    }
}
