//! Terminal formatting shared by commands.

use crate::template::Category;
use chrono::{DateTime, Utc};
use std::io::IsTerminal;

/// Width of the widest category label, for column alignment.
const BADGE_WIDTH: usize = 11;

/// Whether stdout should get ANSI colors.
pub(super) fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn ansi_code(style: &str) -> &'static str {
    match style {
        "green" => "32",
        "blue" => "34",
        "magenta" => "35",
        "yellow" => "33",
        "red" => "31",
        _ => "90",
    }
}

/// `[Label]`, padded to a fixed width and colored by the category's style.
pub(super) fn badge(category: Category, color: bool) -> String {
    let text = format!("{:<width$}", format!("[{}]", category.label()), width = BADGE_WIDTH + 2);
    if color {
        format!("\x1b[{}m{}\x1b[0m", ansi_code(category.style()), text)
    } else {
        text
    }
}

pub(super) fn format_last_used(last_used: Option<DateTime<Utc>>) -> String {
    match last_used {
        Some(at) => at.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "never".to_string(),
    }
}

/// `{a}, {b}` or `(none)`.
pub(super) fn format_placeholders(names: &[String]) -> String {
    if names.is_empty() {
        return "(none)".to_string();
    }
    names
        .iter()
        .map(|name| format!("{{{}}}", name))
        .collect::<Vec<_>>()
        .join(", ")
}
