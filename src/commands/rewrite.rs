//! Implementation of the `quickreply rewrite` command.
//!
//! Runs the content assistant on a template. The rewrite is only saved with
//! `--apply`, and never when the assistant fails.

use super::display::format_placeholders;
use super::require_index;
use crate::assistant::{Assistant, ContentAssistant, RewriteOutcome, rewrite_content};
use crate::cli::RewriteArgs;
use crate::context::AppContext;
use crate::error::{AppError, Result};
use crate::store::TemplateRepository;
use crate::template::TemplateDraft;

/// Execute the `quickreply rewrite` command.
pub fn cmd_rewrite<R: TemplateRepository>(ctx: &AppContext, store: &R, args: RewriteArgs) -> Result<()> {
    // Configuration problems (like a missing API key) surface before any request.
    let assistant = Assistant::from_config(&ctx.config.assistant)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::AssistantError(format!("failed to start async runtime: {}", e)))?;
    let outcome = runtime.block_on(rewrite_template(store, &assistant, &args))?;

    println!("{}", outcome.content);
    if !outcome.missing_placeholders.is_empty() {
        eprintln!(
            "Warning: the rewrite dropped placeholders: {}",
            format_placeholders(&outcome.missing_placeholders)
        );
    }
    if args.apply {
        eprintln!("Saved rewrite to template {}.", args.id);
    } else {
        eprintln!("Not saved. Run again with --apply to keep this rewrite.");
    }
    Ok(())
}

async fn rewrite_template<R: TemplateRepository, A: ContentAssistant>(
    store: &R,
    assistant: &A,
    args: &RewriteArgs,
) -> Result<RewriteOutcome> {
    let mut templates = if args.apply {
        store.try_load_all()?
    } else {
        store.load_all()
    };
    let index = require_index(&templates, &args.id)?;

    let outcome = rewrite_content(assistant, &templates[index].content, &args.instruction).await?;

    if args.apply {
        let mut draft = TemplateDraft::from_template(&templates[index]);
        draft.content = outcome.content.clone();
        draft.apply_to(&mut templates[index])?;
        store.try_save_all(&templates)?;
        tracing::info!(id = %templates[index].id, "applied rewrite");
    }

    Ok(outcome)
}
