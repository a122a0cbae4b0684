//! `inkpost comment` commands - add and list comments

use crate::cli::{Cli, OutputFormat};
use inkpost_core::error::Result;
use inkpost_core::format::excerpt;
use inkpost_core::post::NewComment;
use inkpost_core::store::Store;

pub fn add(
    cli: &Cli,
    store: &Store,
    post_id: &str,
    body: &str,
    author: Option<&str>,
    author_name: Option<&str>,
) -> Result<()> {
    let comment = store.create_comment(NewComment {
        post_id,
        body,
        author_id: author,
        author_name,
    })?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comment)?),
        OutputFormat::Human => println!("{}", comment.id),
    }
    Ok(())
}

pub fn list(cli: &Cli, store: &Store, post_id: &str) -> Result<()> {
    let comments = store.list_comments(post_id)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comments)?),
        OutputFormat::Human => {
            if comments.is_empty() {
                if !cli.quiet {
                    println!("No comments yet");
                }
                return Ok(());
            }
            for comment in &comments {
                println!(
                    "{}  {}: {}",
                    comment.id,
                    comment.author_name,
                    excerpt(&comment.body, 100)
                );
            }
        }
    }
    Ok(())
}
