//! `inkpost init` command - create a new store
//!
//! Idempotent: running it again keeps the existing config and data.

use crate::cli::OutputFormat;
use crate::commands::dispatch::{explicit_store_path, CommandContext};
use inkpost_core::error::Result;
use inkpost_core::id::IdScheme;
use inkpost_core::store::{InitOptions, Store};

/// Execute the init command
pub fn execute(
    ctx: &CommandContext,
    id_scheme: Option<IdScheme>,
    default_author: Option<String>,
) -> Result<()> {
    let options = InitOptions {
        id_scheme,
        default_author,
    };

    let store = match explicit_store_path(ctx.cli, ctx.root) {
        Some(path) => Store::init_at(&path, options)?,
        None => Store::init(ctx.root, options)?,
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let db = store.db();
            let output = serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "message": "Store initialized",
                "schema_version": db.get_schema_version()?,
                "posts": db.get_post_count()?,
                "comments": db.get_comment_count()?,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Initialized inkpost store at {}", store.root().display());
            }
        }
    }

    Ok(())
}
