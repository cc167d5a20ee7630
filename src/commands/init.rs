//! Implementation of the `quickreply init` and `quickreply reset` commands.

use crate::cli::ResetArgs;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::{AppError, Result};
use crate::fs::atomic_write_file;
use crate::store::{JsonFileStore, TemplateRepository, default_templates};

#[derive(Debug, Default, PartialEq, Eq)]
struct InitReport {
    wrote_config: bool,
    seeded_templates: bool,
}

/// Execute the `quickreply init` command.
///
/// Idempotent: existing config and templates are kept.
pub fn cmd_init(ctx: &AppContext, store: &JsonFileStore) -> Result<()> {
    let report = init_data_dir(ctx, store)?;

    println!("Data directory: {}", ctx.data_dir.display());
    if report.wrote_config {
        println!("  created {}", ctx.config_path().display());
    } else {
        println!("  kept    {}", ctx.config_path().display());
    }
    if report.seeded_templates {
        println!("  created {} (starter templates)", store.path().display());
    } else {
        println!("  kept    {}", store.path().display());
    }
    Ok(())
}

fn init_data_dir(ctx: &AppContext, store: &JsonFileStore) -> Result<InitReport> {
    let mut report = InitReport::default();

    let config_path = ctx.config_path();
    if !config_path.exists() {
        atomic_write_file(&config_path, &Config::default().to_yaml()?)?;
        report.wrote_config = true;
    }

    // An existing but unreadable store is reported rather than overwritten.
    if store.read()?.is_none() {
        store.try_save_all(&default_templates())?;
        report.seeded_templates = true;
    }

    tracing::info!(data_dir = %ctx.data_dir.display(), ?report, "initialized data directory");
    Ok(report)
}

/// Execute the `quickreply reset` command.
pub fn cmd_reset<R: TemplateRepository>(store: &R, args: ResetArgs) -> Result<()> {
    if !args.yes {
        return Err(AppError::UserError(
            "reset replaces every template with the starter set.\n\
             Fix: run `quickreply reset --yes` to confirm."
                .to_string(),
        ));
    }

    store.try_save_all(&default_templates())?;
    println!("Replaced all templates with the starter set.");
    Ok(())
}
