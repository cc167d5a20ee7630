//! Implementation of the `quickreply add`, `edit`, and `delete` commands.
//!
//! All three load the collection strictly (an unreadable store is an error
//! rather than the defaults) and validate before changing anything, so a
//! rejected edit leaves the stored templates untouched.

use super::require_index;
use crate::cli::{AddArgs, EditArgs, TemplateArgs};
use crate::engine;
use crate::error::{AppError, Result};
use crate::store::TemplateRepository;
use crate::template::{Template, TemplateDraft};
use std::path::Path;

/// Execute the `quickreply add` command.
pub fn cmd_add<R: TemplateRepository>(store: &R, args: AddArgs) -> Result<()> {
    let template = add_template(store, args)?;
    println!("Added template {} ({})", template.id, template.title);
    Ok(())
}

fn add_template<R: TemplateRepository>(store: &R, args: AddArgs) -> Result<Template> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => read_content_file(&path)?,
        (None, None) => {
            return Err(AppError::UserError(
                "template content is missing; pass --content or --file".to_string(),
            ));
        }
    };

    let template = TemplateDraft {
        title: args.title,
        content: engine::normalize_legacy_content(&content),
        category: args.category,
    }
    .into_template()?;

    let mut templates = store.try_load_all()?;
    templates.push(template.clone());
    store.try_save_all(&templates)?;

    tracing::info!(id = %template.id, "added template");
    Ok(template)
}

/// Execute the `quickreply edit` command.
pub fn cmd_edit<R: TemplateRepository>(store: &R, args: EditArgs) -> Result<()> {
    let template = edit_template(store, args)?;
    println!("Updated template {} ({})", template.id, template.title);
    Ok(())
}

fn edit_template<R: TemplateRepository>(store: &R, args: EditArgs) -> Result<Template> {
    if args.title.is_none() && args.category.is_none() && args.content.is_none() && args.file.is_none() {
        return Err(AppError::UserError(
            "nothing to change; pass --title, --category, --content, or --file".to_string(),
        ));
    }

    let content = match (args.content, args.file) {
        (Some(content), _) => Some(content),
        (None, Some(path)) => Some(read_content_file(&path)?),
        (None, None) => None,
    };

    let mut templates = store.try_load_all()?;
    let index = require_index(&templates, &args.id)?;

    let mut draft = TemplateDraft::from_template(&templates[index]);
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(content) = content {
        draft.content = engine::normalize_legacy_content(&content);
    }

    draft.apply_to(&mut templates[index])?;
    store.try_save_all(&templates)?;

    tracing::info!(id = %templates[index].id, "updated template");
    Ok(templates.swap_remove(index))
}

/// Execute the `quickreply delete` command.
pub fn cmd_delete<R: TemplateRepository>(store: &R, args: TemplateArgs) -> Result<()> {
    let removed = delete_template(store, &args.id)?;
    println!("Deleted template {} ({})", removed.id, removed.title);
    Ok(())
}

fn delete_template<R: TemplateRepository>(store: &R, id: &str) -> Result<Template> {
    let mut templates = store.try_load_all()?;
    let index = require_index(&templates, id)?;
    let removed = templates.remove(index);
    store.try_save_all(&templates)?;

    tracing::info!(id = %removed.id, "deleted template");
    Ok(removed)
}

fn read_content_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        AppError::UserError(format!(
            "failed to read content file '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, default_templates};
    use crate::template::Category;
    use tempfile::TempDir;

    fn add_args(title: &str, content: &str) -> AddArgs {
        AddArgs {
            title: title.to_string(),
            category: Category::Quote,
            content: Some(content.to_string()),
            file: None,
        }
    }

    fn edit_args(id: &str) -> EditArgs {
        EditArgs {
            id: id.to_string(),
            title: None,
            category: None,
            content: None,
            file: None,
        }
    }

    #[test]
    fn test_add_appends_to_defaults() {
        let store = MemoryStore::default();

        let added = add_template(&store, add_args("  Auto quote ", "Hi {name}")).unwrap();

        assert_eq!(added.title, "Auto quote");
        assert_eq!(added.category, Category::Quote);
        assert!(added.last_used.is_none());
        let saved = store.saved().unwrap();
        assert_eq!(saved.len(), default_templates().len() + 1);
        assert_eq!(saved.last().unwrap().id, added.id);
    }

    #[test]
    fn test_add_converts_plain_line_breaks() {
        let store = MemoryStore::with(vec![]);
        let added = add_template(&store, add_args("T", "Line one\nLine two")).unwrap();
        assert_eq!(added.content, "Line one<br>Line two");
    }

    #[test]
    fn test_add_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("body.html");
        std::fs::write(&path, "<b>Hello</b> {name}").unwrap();
        let store = MemoryStore::with(vec![]);
        let args = AddArgs {
            title: "From file".to_string(),
            category: Category::Other,
            content: None,
            file: Some(path),
        };

        let added = add_template(&store, args).unwrap();
        assert_eq!(added.content, "<b>Hello</b> {name}");
    }

    #[test]
    fn test_add_missing_file_is_user_error() {
        let store = MemoryStore::with(vec![]);
        let args = AddArgs {
            title: "T".to_string(),
            category: Category::Other,
            content: None,
            file: Some("/nonexistent/quickreply/body.html".into()),
        };
        assert!(matches!(
            add_template(&store, args).unwrap_err(),
            AppError::UserError(_)
        ));
    }

    #[test]
    fn test_add_rejects_blank_fields_without_saving() {
        let store = MemoryStore::with(vec![]);

        let err = add_template(&store, add_args("   ", "Hi")).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = add_template(&store, add_args("Title", "<p><br></p>")).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        assert_eq!(store.saved().unwrap(), vec![]);
    }

    #[test]
    fn test_add_reports_save_failure() {
        let store = MemoryStore::failing();
        let err = add_template(&store, add_args("T", "Hi")).unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
    }

    #[test]
    fn test_edit_changes_only_given_fields() {
        let store = MemoryStore::with(default_templates());
        let mut args = edit_args("default-renewal");
        args.title = Some("Renewal (short)".to_string());

        let updated = edit_template(&store, args).unwrap();

        let original = &default_templates()[3];
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, "Renewal (short)");
        assert_eq!(updated.content, original.content);
        assert_eq!(updated.category, original.category);
        assert_eq!(store.saved().unwrap()[3].title, "Renewal (short)");
    }

    #[test]
    fn test_edit_content_and_category() {
        let store = MemoryStore::with(default_templates());
        let mut args = edit_args("default-q");
        args.content = Some("New {x}".to_string());
        args.category = Some(Category::Other);

        let updated = edit_template(&store, args).unwrap();
        assert_eq!(updated.id, "default-quote");
        assert_eq!(updated.content, "New {x}");
        assert_eq!(updated.category, Category::Other);
    }

    #[test]
    fn test_edit_without_changes_is_user_error() {
        let store = MemoryStore::with(default_templates());
        let err = edit_template(&store, edit_args("default-quote")).unwrap_err();
        assert!(matches!(err, AppError::UserError(_)));
    }

    #[test]
    fn test_invalid_edit_leaves_store_untouched() {
        let store = MemoryStore::with(default_templates());
        let mut args = edit_args("default-quote");
        args.title = Some(" ".to_string());
        args.content = Some("changed".to_string());

        let err = edit_template(&store, args).unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(store.saved().unwrap(), default_templates());
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::with(default_templates());

        let removed = delete_template(&store, "default-claims").unwrap();

        assert_eq!(removed.id, "default-claims");
        let saved = store.saved().unwrap();
        assert_eq!(saved.len(), 4);
        assert!(saved.iter().all(|t| t.id != "default-claims"));
    }

    #[test]
    fn test_delete_unknown_id() {
        let store = MemoryStore::with(default_templates());
        let err = delete_template(&store, "nope").unwrap_err();
        assert!(matches!(err, AppError::UserError(_)));
        assert_eq!(store.saved().unwrap().len(), 5);
    }

    #[test]
    fn test_mutations_refuse_unreadable_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = crate::store::JsonFileStore::new(temp_dir.path().join("templates.json"));
        std::fs::write(store.path(), "[broken").unwrap();

        let err = add_template(&store, add_args("T", "Hi")).unwrap_err();

        assert!(matches!(err, AppError::StorageError(_)));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[broken");
    }
}
