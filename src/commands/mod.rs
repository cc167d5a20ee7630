//! Command implementations for quickreply.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command works against a [`TemplateRepository`];
//! the dispatcher wires in the JSON file store from the resolved data
//! directory.

mod display;
mod edit;
mod fill;
mod init;
mod list;
mod migrate;
mod rewrite;
mod show;

use crate::cli::Command;
use crate::context::AppContext;
use crate::error::{AppError, Result};
use crate::store::{JsonFileStore, find_index};
use crate::template::Template;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let ctx = AppContext::resolve()?;
    let store = JsonFileStore::new(ctx.store_path());
    tracing::debug!(command = ?command, store = %store.path().display(), "dispatching");

    match command {
        Command::Init => init::cmd_init(&ctx, &store),
        Command::List(args) => list::cmd_list(&store, args),
        Command::Show(args) => show::cmd_show(&store, args),
        Command::Placeholders(args) => show::cmd_placeholders(&store, args),
        Command::Fill(args) => fill::cmd_fill(&ctx, &store, args),
        Command::Add(args) => edit::cmd_add(&store, args),
        Command::Edit(args) => edit::cmd_edit(&store, args),
        Command::Delete(args) => edit::cmd_delete(&store, args),
        Command::Rewrite(args) => rewrite::cmd_rewrite(&ctx, &store, args),
        Command::Migrate => migrate::cmd_migrate(&store),
        Command::Categories => list::cmd_categories(),
        Command::Reset(args) => init::cmd_reset(&store, args),
    }
}

/// Resolve a template ID argument (exact, or a unique prefix).
fn require_index(templates: &[Template], id: &str) -> Result<usize> {
    find_index(templates, id).ok_or_else(|| {
        AppError::UserError(format!(
            "no template matches '{}' (unknown or ambiguous ID).\n\n\
             Use `quickreply list` to see template IDs.",
            id
        ))
    })
}
