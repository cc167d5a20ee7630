//! Implementation of the `quickreply fill` command.
//!
//! Fills a template's placeholders from `--set` values (and, with
//! `--prompt`, from answers typed on stdin), prints the result, and
//! optionally copies it. A successful copy counts as a use of the template.

use super::display::format_placeholders;
use super::require_index;
use crate::cli::FillArgs;
use crate::clipboard::{ClipboardWriter, CopyOutcome, SystemClipboard, copy_payload};
use crate::context::AppContext;
use crate::error::{AppError, Result};
use crate::session::ComposeSession;
use crate::store::TemplateRepository;
use chrono::Utc;
use std::io::{BufRead, Write};

/// What a fill produced.
#[derive(Debug)]
struct FillReport {
    /// Text to print: markup, or plain text with `--plain`.
    output: String,
    /// Placeholders left without a value.
    unfilled: Vec<String>,
    /// `--set` names the template does not use.
    unknown: Vec<String>,
    /// Set when the result was copied.
    copied: Option<CopyOutcome>,
}

/// Execute the `quickreply fill` command.
pub fn cmd_fill<R: TemplateRepository>(ctx: &AppContext, store: &R, args: FillArgs) -> Result<()> {
    let clipboard = if args.copy {
        Some(SystemClipboard::from_config(&ctx.config.clipboard)?)
    } else {
        None
    };

    let stdin = std::io::stdin();
    let report = fill_template(
        store,
        &args,
        clipboard.as_ref().map(|c| c as &dyn ClipboardWriter),
        &mut stdin.lock(),
        &mut std::io::stderr(),
    )?;

    for name in &report.unknown {
        eprintln!("Warning: '{}' is not a placeholder of this template; ignored.", name);
    }
    println!("{}", report.output.trim_end());
    if !report.unfilled.is_empty() {
        eprintln!("Unfilled: {}", format_placeholders(&report.unfilled));
    }
    match report.copied {
        Some(CopyOutcome::Rich) => eprintln!("Copied to clipboard."),
        Some(CopyOutcome::PlainOnly) => {
            eprintln!("Copied to clipboard as plain text (formatted copy unavailable).")
        }
        None => {}
    }
    Ok(())
}

fn fill_template<R: TemplateRepository>(
    store: &R,
    args: &FillArgs,
    clipboard: Option<&dyn ClipboardWriter>,
    input: &mut dyn BufRead,
    prompts: &mut dyn Write,
) -> Result<FillReport> {
    // A store that cannot be read still yields the defaults, but then
    // nothing is written back.
    let (mut templates, writable) = match store.try_load_all() {
        Ok(templates) => (templates, true),
        Err(e) => {
            tracing::warn!(error = %e, "using default templates; last use will not be recorded");
            (store.load_all(), false)
        }
    };
    let index = require_index(&templates, &args.id)?;

    let mut session = ComposeSession::new();
    session.activate(&templates[index]);

    let mut unknown = Vec::new();
    for (name, value) in &args.set {
        if !session.set(name.as_str(), value.as_str()) {
            unknown.push(name.clone());
        }
    }

    if args.prompt {
        prompt_for_values(&mut session, input, prompts)?;
    }

    tracing::debug!(
        template = ?session.active().map(|t| t.id.as_str()),
        values = session.values().len(),
        "composed message"
    );
    let payload = session
        .payload()
        .ok_or_else(|| AppError::UserError("no active template".to_string()))?;

    let copied = match clipboard {
        Some(writer) => {
            let outcome = copy_payload(writer, &payload)?;
            if writable && templates[index].touch(Utc::now()) {
                store.save_all(&templates);
            }
            Some(outcome)
        }
        None => None,
    };

    Ok(FillReport {
        output: if args.plain { payload.plain } else { payload.html },
        unfilled: session.unfilled(),
        unknown,
        copied,
    })
}

/// Ask for every placeholder that is still unfilled.
///
/// An empty answer leaves the placeholder unfilled. Input ending early stops
/// the questions.
fn prompt_for_values(
    session: &mut ComposeSession,
    input: &mut dyn BufRead,
    prompts: &mut dyn Write,
) -> Result<()> {
    for name in session.unfilled() {
        write!(prompts, "{}: ", name)
            .and_then(|_| prompts.flush())
            .map_err(|e| AppError::UserError(format!("failed to write prompt: {}", e)))?;

        let mut answer = String::new();
        let read = input
            .read_line(&mut answer)
            .map_err(|e| AppError::UserError(format!("failed to read input: {}", e)))?;
        if read == 0 {
            break;
        }

        let answer = answer.trim_end_matches(['\r', '\n']);
        if !answer.is_empty() {
            session.set(name, answer);
        }
    }
    Ok(())
}
