//! Implementation of the `quickreply list` and `quickreply categories` commands.

use super::display::{badge, format_last_used, use_color};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::store::TemplateRepository;
use crate::template::{Category, Template, search};

/// Execute the `quickreply list` command.
pub fn cmd_list<R: TemplateRepository>(store: &R, args: ListArgs) -> Result<()> {
    let templates = store.load_all();
    let query = args.search.unwrap_or_default();
    let matches = search(&templates, &query, args.category);

    if matches.is_empty() {
        if templates.is_empty() {
            println!("No templates yet. Use `quickreply add` or `quickreply reset --yes`.");
        } else {
            println!("No templates match.");
        }
        return Ok(());
    }

    print!("{}", render_list(&matches, use_color()));
    Ok(())
}

/// One line per template: ID, category badge, title, last use.
fn render_list(templates: &[&Template], color: bool) -> String {
    let id_width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for template in templates {
        out.push_str(&format!(
            "{:<id_width$}  {} {}  (used: {})\n",
            template.id,
            badge(template.category, color),
            template.title,
            format_last_used(template.last_used),
            id_width = id_width
        ));
    }
    out
}

/// Execute the `quickreply categories` command.
pub fn cmd_categories() -> Result<()> {
    print!("{}", render_categories(use_color()));
    Ok(())
}

fn render_categories(color: bool) -> String {
    Category::ALL
        .iter()
        .map(|category| format!("{:<10} {}\n", category.key(), badge(*category, color).trim_end()))
        .collect()
}
