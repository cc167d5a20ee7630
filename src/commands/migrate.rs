//! Implementation of the `quickreply migrate` command.
//!
//! Loading already normalizes legacy content in memory; `migrate` writes the
//! result back in the current versioned format so the conversion happens
//! once.

use crate::error::Result;
use crate::store::{CURRENT_VERSION, JsonFileStore, TemplateRepository};

#[derive(Debug, PartialEq, Eq)]
enum MigrateOutcome {
    NothingStored,
    AlreadyCurrent,
    Migrated { templates: usize },
}

/// Execute the `quickreply migrate` command.
pub fn cmd_migrate(store: &JsonFileStore) -> Result<()> {
    match migrate_store(store)? {
        MigrateOutcome::NothingStored => {
            println!("No template store at {}; nothing to migrate.", store.path().display())
        }
        MigrateOutcome::AlreadyCurrent => {
            println!("Template store is already at version {}.", CURRENT_VERSION)
        }
        MigrateOutcome::Migrated { templates } => println!(
            "Migrated {} templates to format version {}.",
            templates, CURRENT_VERSION
        ),
    }
    Ok(())
}

fn migrate_store(store: &JsonFileStore) -> Result<MigrateOutcome> {
    // Unlike `load_all`, an unreadable store is reported, not replaced.
    let Some(collection) = store.read()? else {
        return Ok(MigrateOutcome::NothingStored);
    };
    if !collection.is_legacy() {
        return Ok(MigrateOutcome::AlreadyCurrent);
    }

    let from_version = collection.version;
    let templates = collection.into_current();
    store.try_save_all(&templates)?;

    tracing::info!(from_version, to_version = CURRENT_VERSION, count = templates.len(), "migrated template store");
    Ok(MigrateOutcome::Migrated {
        templates: templates.len(),
    })
}
