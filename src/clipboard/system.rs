//! Clipboard access through the native clipboard or command-line tools.

use super::{ClipboardPayload, ClipboardWriter};
use crate::config::ClipboardConfig;
use crate::error::{AppError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Environment variable carrying the plain text to a configured rich command.
const PLAIN_TEXT_ENV: &str = "QUICKREPLY_PLAIN_TEXT";

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Pick a plain-text tool for the current platform and session.
fn detect_plain_tool(wayland: bool, x11: bool) -> Option<Vec<String>> {
    if cfg!(target_os = "macos") {
        return Some(argv(&["pbcopy"]));
    }
    if cfg!(windows) {
        return Some(argv(&["clip"]));
    }
    if wayland {
        return Some(argv(&["wl-copy"]));
    }
    if x11 {
        return Some(argv(&["xclip", "-selection", "clipboard"]));
    }
    None
}

fn env_present(key: &str) -> bool {
    std::env::var_os(key).is_some_and(|v| !v.is_empty())
}

fn parse_command(command_line: &str) -> Result<Vec<String>> {
    let args = shell_words::split(command_line).map_err(|e| {
        AppError::ConfigError(format!(
            "failed to parse clipboard command '{}': {}",
            command_line, e
        ))
    })?;
    if args.is_empty() {
        return Err(AppError::ConfigError(format!(
            "clipboard command is empty after parsing: '{}'",
            command_line
        )));
    }
    Ok(args)
}

/// Run `args` with `input` on stdin and require a zero exit status.
fn pipe_to(args: &[String], input: &str, envs: &[(&str, &str)]) -> Result<()> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| AppError::ClipboardError("empty clipboard command".to_string()))?;

    let mut child = Command::new(program)
        .args(rest)
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            AppError::ClipboardError(format!(
                "failed to run '{}': {}\nFix: install it or set a clipboard command in config.yaml.",
                program, e
            ))
        })?;

    if let Some(mut stdin) = child.stdin.take()
        && let Err(e) = stdin.write_all(input.as_bytes())
    {
        drop(stdin);
        let _ = child.kill();
        let _ = child.wait();
        return Err(AppError::ClipboardError(format!(
            "failed to write to '{}': {}",
            program, e
        )));
    }

    let status = child.wait().map_err(|e| {
        AppError::ClipboardError(format!("failed to wait for '{}': {}", program, e))
    })?;
    if !status.success() {
        return Err(AppError::ClipboardError(format!(
            "'{}' exited with {}",
            program, status
        )));
    }

    tracing::debug!(program = %program, bytes = input.len(), "wrote clipboard");
    Ok(())
}

/// Where the rich write goes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RichTarget {
    /// A configured command: HTML on stdin, plain text in [`PLAIN_TEXT_ENV`].
    Command(Vec<String>),
    /// The platform clipboard, holding HTML and plain text together.
    Native,
}

/// Offer both representations in one clipboard ownership.
fn write_native(payload: &ClipboardPayload) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| {
        AppError::ClipboardError(format!("failed to open the system clipboard: {}", e))
    })?;
    clipboard
        .set_html(payload.html.as_str(), Some(payload.plain.as_str()))
        .map_err(|e| AppError::ClipboardError(format!("failed to set rich text: {}", e)))?;

    tracing::debug!(bytes = payload.html.len(), "wrote native clipboard");
    Ok(())
}

/// The user's system clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemClipboard {
    plain: Option<Vec<String>>,
    rich: RichTarget,
}

impl SystemClipboard {
    /// Configured commands first, then the native clipboard for rich text
    /// and the detected platform tool for plain text.
    pub fn from_config(config: &ClipboardConfig) -> Result<Self> {
        let plain = match &config.plain_command {
            Some(command) => Some(parse_command(command)?),
            None => detect_plain_tool(env_present("WAYLAND_DISPLAY"), env_present("DISPLAY")),
        };
        let rich = match &config.rich_command {
            Some(command) => RichTarget::Command(parse_command(command)?),
            None => RichTarget::Native,
        };

        Ok(Self { plain, rich })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_rich(&self, payload: &ClipboardPayload) -> Result<()> {
        match &self.rich {
            RichTarget::Command(command) => pipe_to(
                command,
                &payload.html,
                &[(PLAIN_TEXT_ENV, payload.plain.as_str())],
            ),
            RichTarget::Native => write_native(payload),
        }
    }

    fn write_plain(&self, text: &str) -> Result<()> {
        let command = self.plain.as_ref().ok_or_else(|| {
            AppError::ClipboardError(
                "no clipboard tool found\nFix: set clipboard.plain_command in config.yaml."
                    .to_string(),
            )
        })?;
        pipe_to(command, text, &[])
    }
}
