//! `inkpost post` commands - create, list and show posts

use crate::cli::{Cli, OutputFormat};
use inkpost_core::error::{InkpostError, Result};
use inkpost_core::format::excerpt;
use inkpost_core::post::{Comment, NewPost, Post};
use inkpost_core::store::Store;

/// Print the new post's id (human) or the full record (json)
pub fn create(
    cli: &Cli,
    store: &Store,
    title: &str,
    body: &str,
    author: Option<&str>,
    image: Option<&str>,
) -> Result<()> {
    let post = store.create_post(NewPost {
        title,
        body,
        author_id: author,
        image_storage_id: image,
    })?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&post)?),
        OutputFormat::Human => println!("{}", post.id),
    }
    Ok(())
}

pub fn list(cli: &Cli, store: &Store) -> Result<()> {
    let posts = store.list_posts()?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
        OutputFormat::Human => {
            if posts.is_empty() {
                if !cli.quiet {
                    println!("No posts found");
                }
                return Ok(());
            }
            for post in &posts {
                println!("{}  {}  {}", post.id, created_date(&post.created), post.title);
            }
        }
    }
    Ok(())
}

/// Show a post followed by its comments
pub fn show(cli: &Cli, store: &Store, id: &str) -> Result<()> {
    let post = store
        .get_post(id)?
        .ok_or_else(|| InkpostError::not_found("post", id))?;
    let comments = store.list_comments(&post.id)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "post": post,
                "comments": comments,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_post_human(&post, &comments),
    }
    Ok(())
}

fn print_post_human(post: &Post, comments: &[Comment]) {
    println!("{}", post.title);
    println!(
        "{} | by {} | {}",
        post.id,
        post.author_id,
        created_date(&post.created)
    );
    if let Some(image) = &post.image_storage_id {
        println!("image: {}", image);
    }
    println!();
    println!("{}", post.body);
    println!();

    let noun = if comments.len() == 1 { "comment" } else { "comments" };
    println!("{} {}", comments.len(), noun);
    for comment in comments {
        println!(
            "  - {} ({}): {}",
            comment.author_name,
            created_date(&comment.created),
            excerpt(&comment.body, 120)
        );
    }
}

/// Date part of an RFC 3339 timestamp
fn created_date(created: &str) -> &str {
    created.split('T').next().unwrap_or(created)
}
