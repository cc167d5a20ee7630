//! Implementation of the `quickreply show` and `quickreply placeholders` commands.

use super::display::{badge, format_last_used, format_placeholders, use_color};
use super::require_index;
use crate::cli::TemplateArgs;
use crate::error::Result;
use crate::store::TemplateRepository;
use crate::template::Template;

/// Execute the `quickreply show` command.
pub fn cmd_show<R: TemplateRepository>(store: &R, args: TemplateArgs) -> Result<()> {
    let templates = store.load_all();
    let index = require_index(&templates, &args.id)?;
    print!("{}", render_template(&templates[index], use_color()));
    Ok(())
}

fn render_template(template: &Template, color: bool) -> String {
    let rule = "=".repeat(80);
    let mut out = String::new();
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("{} {}\n", badge(template.category, color).trim_end(), template.title));
    out.push_str(&format!("{}\n\n", rule));
    out.push_str(&format!("ID:           {}\n", template.id));
    out.push_str(&format!("Last used:    {}\n", format_last_used(template.last_used)));
    out.push_str(&format!(
        "Placeholders: {}\n",
        format_placeholders(&template.placeholders())
    ));
    out.push_str("\nContent:\n");
    out.push_str(&template.content);
    out.push_str("\n\nPlain text:\n");
    out.push_str(template.plain_text().trim_end());
    out.push('\n');
    out
}

/// Execute the `quickreply placeholders` command.
///
/// Prints one name per line, so the output can feed scripts.
pub fn cmd_placeholders<R: TemplateRepository>(store: &R, args: TemplateArgs) -> Result<()> {
    let templates = store.load_all();
    let index = require_index(&templates, &args.id)?;
    let names = templates[index].placeholders();

    if names.is_empty() {
        eprintln!("Template '{}' has no placeholders.", templates[index].id);
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
