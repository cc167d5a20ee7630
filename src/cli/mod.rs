//! CLI argument parsing for quickreply.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::template::Category;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Quickreply: message templates with fill-in placeholders.
///
/// Templates are short formatted messages containing `{placeholder}` names.
/// Fill in the placeholders, preview the result, and copy it to the
/// clipboard as formatted text with a plain-text fallback.
#[derive(Parser, Debug)]
#[command(name = "quickreply")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log more detail to stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for quickreply.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory, a default config, and the starter templates.
    Init,

    /// List templates, most recently used first.
    ///
    /// Optionally filter by a search query (matched against titles and the
    /// plain text of the content) and by category.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a template's content and metadata.
    Show(TemplateArgs),

    /// List the placeholders a template needs, in order of appearance.
    Placeholders(TemplateArgs),

    /// Fill a template's placeholders and print or copy the result.
    ///
    /// Placeholders without a value stay in the output as `{name}`.
    Fill(FillArgs),

    /// Add a new template.
    Add(AddArgs),

    /// Change a template's title, category, or content.
    Edit(EditArgs),

    /// Delete a template.
    #[command(alias = "rm")]
    Delete(TemplateArgs),

    /// Rewrite a template's content with the content assistant.
    ///
    /// Prints the rewrite; `--apply` saves it over the current content.
    Rewrite(RewriteArgs),

    /// Upgrade a legacy template store to the current format.
    Migrate,

    /// List the template categories.
    Categories,

    /// Replace all templates with the starter set.
    Reset(ResetArgs),
}

/// Arguments naming a single template.
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Template ID (a unique prefix is enough).
    pub id: String,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show templates whose title or text contains this (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show templates in this category.
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,
}

/// Arguments for the `fill` command.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Template ID (a unique prefix is enough).
    pub id: String,

    /// Placeholder value, as NAME=VALUE. Repeatable.
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Ask for each placeholder that has no value yet.
    #[arg(short, long)]
    pub prompt: bool,

    /// Print the plain-text version instead of markup.
    #[arg(long)]
    pub plain: bool,

    /// Copy the result to the clipboard.
    #[arg(short, long)]
    pub copy: bool,
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Template title.
    #[arg(short, long)]
    pub title: String,

    /// Template category.
    #[arg(short, long, default_value = "other", value_parser = parse_category)]
    pub category: Category,

    /// Markup content, e.g. "Hi {client_name},<br>thanks for your time."
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the markup content from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `edit` command.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Template ID (a unique prefix is enough).
    pub id: String,

    /// New title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// New category.
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// New markup content.
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the new markup content from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `rewrite` command.
#[derive(Parser, Debug)]
pub struct RewriteArgs {
    /// Template ID (a unique prefix is enough).
    pub id: String,

    /// What to change, e.g. "make it more formal".
    #[arg(short, long)]
    pub instruction: String,

    /// Save the rewrite over the template's content.
    #[arg(long)]
    pub apply: bool,
}

/// Arguments for the `reset` command.
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Confirm that all current templates may be discarded.
    #[arg(long)]
    pub yes: bool,
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_str(s).ok_or_else(|| {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        format!("unknown category '{}' (expected one of: {})", s, keys.join(", "))
    })
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["quickreply", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Init));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_verbose_anywhere() {
        let cli = Cli::try_parse_from(["quickreply", "list", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "quickreply",
            "list",
            "--search",
            "renew",
            "--category",
            "follow-up",
        ])
        .unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.search.as_deref(), Some("renew"));
            assert_eq!(args.category, Some(Category::FollowUp));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_parse_unknown_category_fails() {
        let result = Cli::try_parse_from(["quickreply", "list", "--category", "spam"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_fill() {
        let cli = Cli::try_parse_from([
            "quickreply",
            "fill",
            "default-renewal",
            "--set",
            "client_name=Anna",
            "-s",
            "note=a=b",
            "--copy",
        ])
        .unwrap();
        if let Command::Fill(args) = cli.command {
            assert_eq!(args.id, "default-renewal");
            assert_eq!(
                args.set,
                vec![
                    ("client_name".to_string(), "Anna".to_string()),
                    ("note".to_string(), "a=b".to_string()),
                ]
            );
            assert!(args.copy);
            assert!(!args.plain);
            assert!(!args.prompt);
        } else {
            panic!("Expected Fill command");
        }
    }

    #[test]
    fn test_parse_fill_rejects_bad_assignment() {
        assert!(Cli::try_parse_from(["quickreply", "fill", "x", "--set", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["quickreply", "fill", "x", "--set", "=v"]).is_err());
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "quickreply",
            "add",
            "--title",
            "Welcome",
            "--content",
            "Hi {client_name}",
        ])
        .unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.title, "Welcome");
            assert_eq!(args.category, Category::Other);
            assert_eq!(args.content.as_deref(), Some("Hi {client_name}"));
            assert!(args.file.is_none());
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_parse_add_requires_content_or_file() {
        assert!(Cli::try_parse_from(["quickreply", "add", "--title", "T"]).is_err());
        assert!(
            Cli::try_parse_from([
                "quickreply", "add", "--title", "T", "--content", "x", "--file", "y.html"
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["quickreply", "add", "--title", "T", "--file", "y.html"]).is_ok());
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(["quickreply", "edit", "abc", "--category", "claims"]).unwrap();
        if let Command::Edit(args) = cli.command {
            assert_eq!(args.id, "abc");
            assert_eq!(args.category, Some(Category::Claims));
            assert!(args.title.is_none());
            assert!(args.content.is_none());
        } else {
            panic!("Expected Edit command");
        }
    }

    #[test]
    fn test_parse_rewrite() {
        let cli = Cli::try_parse_from([
            "quickreply",
            "rewrite",
            "abc",
            "-i",
            "more formal",
            "--apply",
        ])
        .unwrap();
        if let Command::Rewrite(args) = cli.command {
            assert_eq!(args.instruction, "more formal");
            assert!(args.apply);
        } else {
            panic!("Expected Rewrite command");
        }
    }

    #[test]
    fn test_parse_aliases_and_unit_commands() {
        assert!(matches!(
            Cli::try_parse_from(["quickreply", "ls"]).unwrap().command,
            Command::List(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["quickreply", "rm", "abc"]).unwrap().command,
            Command::Delete(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["quickreply", "migrate"]).unwrap().command,
            Command::Migrate
        ));
        assert!(matches!(
            Cli::try_parse_from(["quickreply", "categories"]).unwrap().command,
            Command::Categories
        ));
    }

    #[test]
    fn test_parse_reset() {
        let cli = Cli::try_parse_from(["quickreply", "reset"]).unwrap();
        if let Command::Reset(args) = cli.command {
            assert!(!args.yes);
        } else {
            panic!("Expected Reset command");
        }
    }
}
