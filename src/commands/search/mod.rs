//! `inkpost search` command - search posts
//!
//! - `inkpost search <term>` - title matches first, then body matches
//! - `--limit` bounds the merged result (default from config)

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use inkpost_core::error::Result;
use inkpost_core::store::Store;

use self::format::{output_human, output_json};

/// Execute the search command
pub fn execute(cli: &Cli, store: &Store, term: &str, limit: Option<i64>) -> Result<()> {
    let start = Instant::now();

    if cli.verbose {
        debug!(term, ?limit, "search_params");
    }

    let results = store.search(term, limit)?;

    if cli.verbose {
        debug!(result_count = results.len(), elapsed = ?start.elapsed(), "search");
    }

    match cli.format {
        OutputFormat::Json => output_json(&results)?,
        OutputFormat::Human => output_human(cli, &results, term),
    }

    Ok(())
}
