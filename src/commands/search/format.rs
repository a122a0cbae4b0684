//! Output formatting for the search command

use crate::cli::Cli;
use inkpost_core::error::Result;
use inkpost_core::format::excerpt;
use inkpost_core::search::SearchResult;

/// Output in JSON format: an array of `{id, title, body}`
pub fn output_json(results: &[SearchResult]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

/// Output in human-readable format
pub fn output_human(cli: &Cli, results: &[SearchResult], term: &str) {
    if results.is_empty() {
        if !cli.quiet {
            println!("No results found for '{}'", term);
        }
        return;
    }

    for result in results {
        println!("{}  {}", result.id, result.title);
        if !cli.quiet {
            println!("    {}", excerpt(&result.body, 80));
        }
    }
}
