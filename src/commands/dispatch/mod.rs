//! Command dispatch logic for inkpost

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::{Cli, CommentCommands, Commands, PostCommands};
use crate::commands;
use inkpost_core::error::Result;
use tracing::debug;

mod command;
mod macros;

pub(crate) use command::{explicit_store_path, CommandContext};
use command::{Command, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    trace_command!(cli, start, "execute_command");
    result
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { id_scheme, author } => {
                commands::init::execute(ctx, *id_scheme, author.clone())
            }
            Commands::Post { command } => command.execute(ctx),
            Commands::Comment { command } => command.execute(ctx),
            Commands::Search { term, limit } => {
                let store = ctx.discover_or_open_store()?;
                commands::search::execute(ctx.cli, &store, term, *limit)
            }
        }
    }
}

impl Command for PostCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        match self {
            PostCommands::Create {
                title,
                body,
                author,
                image,
            } => commands::post::create(
                ctx.cli,
                &store,
                title,
                body,
                author.as_deref(),
                image.as_deref(),
            ),
            PostCommands::List => commands::post::list(ctx.cli, &store),
            PostCommands::Show { id } => commands::post::show(ctx.cli, &store, id),
        }
    }
}

impl Command for CommentCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        match self {
            CommentCommands::Add {
                post_id,
                body,
                author,
                author_name,
            } => commands::comment::add(
                ctx.cli,
                &store,
                post_id,
                body,
                author.as_deref(),
                author_name.as_deref(),
            ),
            CommentCommands::List { post_id } => commands::comment::list(ctx.cli, &store, post_id),
        }
    }
}
