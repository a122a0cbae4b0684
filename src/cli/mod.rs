//! CLI argument parsing for inkpost
//!
//! Global flags: --root, --store, --format, --quiet, --verbose, --log-level, --log-json

pub mod comment;
pub mod output;
pub mod parse;
pub mod paths;
pub mod post;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use inkpost_core::id::IdScheme;
pub use comment::CommentCommands;
pub use output::OutputFormat;
use output::parse_output_format;
use parse::parse_id_scheme;
pub use post::PostCommands;

/// Inkpost - posts, comments and full-text search from the command line
#[derive(Parser, Debug)]
#[command(name = "inkpost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store directory path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new inkpost store
    Init {
        /// ID scheme for new records (hash or ulid)
        #[arg(long, value_parser = parse_id_scheme)]
        id_scheme: Option<IdScheme>,

        /// Default author for posts and comments
        #[arg(long)]
        author: Option<String>,
    },

    /// Create, list and show posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Add and list comments on a post
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },

    /// Search posts: title matches first, then body matches
    Search {
        /// Search term
        term: String,

        /// Maximum number of results (default from config)
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        limit: Option<i64>,
    },
}
