//! Local-command provider.
//!
//! Runs a configured command with the rendered prompt on stdin and takes its
//! stdout as the rewritten template. The command is parsed with shell-words
//! and executed directly, without a shell.

use super::{ContentAssistant, clean_reply, prompt};
use crate::config::AssistantConfig;
use crate::error::{AppError, Result};
use std::io::{Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Longest slice of stderr quoted back to the user.
const STDERR_LIMIT: usize = 500;

#[derive(Debug, Clone)]
pub struct CommandAssistant {
    args: Vec<String>,
    timeout: Duration,
    prompt_template: Option<String>,
}

/// Captured result of one command run.
#[derive(Debug)]
struct CommandOutput {
    exit_code: Option<i32>,
    timed_out: bool,
    stdout: String,
    stderr: String,
}

impl CommandAssistant {
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        let command_line = config.command.as_deref().unwrap_or_default();
        let args = shell_words::split(command_line).map_err(|e| {
            AppError::ConfigError(format!(
                "failed to parse assistant command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                command_line, e
            ))
        })?;

        if args.is_empty() {
            return Err(AppError::ConfigError(
                "assistant.command is empty\nFix: set assistant.command in config.yaml.".to_string(),
            ));
        }

        Ok(Self {
            args,
            timeout: Duration::from_secs(config.timeout_seconds),
            prompt_template: config.prompt_template.clone(),
        })
    }
}

impl ContentAssistant for CommandAssistant {
    async fn rewrite(&self, content: &str, instruction: &str) -> Result<String> {
        let prompt = prompt::build_rewrite_prompt(self.prompt_template.as_deref(), content, instruction)?;
        let args = self.args.clone();
        let timeout = self.timeout;

        tracing::debug!(program = %args[0], "running assistant command");
        let output = tokio::task::spawn_blocking(move || run_command(&args, &prompt, timeout))
            .await
            .map_err(|e| AppError::AssistantError(format!("assistant command task failed: {}", e)))??;

        if output.timed_out {
            return Err(AppError::AssistantError(format!(
                "'{}' timed out after {}s",
                self.args[0],
                self.timeout.as_secs()
            )));
        }
        if output.exit_code != Some(0) {
            let code = output
                .exit_code
                .map_or_else(|| "a signal".to_string(), |c| format!("code {}", c));
            return Err(AppError::AssistantError(format!(
                "'{}' exited with {}: {}",
                self.args[0],
                code,
                tail(output.stderr.trim(), STDERR_LIMIT)
            )));
        }

        clean_reply(&output.stdout)
    }
}

/// Run `args` with `input` on stdin, killing it after `timeout`.
fn run_command(args: &[String], input: &str, timeout: Duration) -> Result<CommandOutput> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| AppError::ConfigError("assistant command is empty".to_string()))?;

    let mut child = Command::new(program)
        .args(rest)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            AppError::AssistantError(format!(
                "failed to execute assistant command '{}': {}\n\
                 Fix: ensure the command is installed and in PATH.",
                program, e
            ))
        })?;

    // Feed stdin and drain both pipes on their own threads so a chatty
    // command cannot block on a full pipe while we wait for it.
    let stdin = child.stdin.take();
    let input = input.to_string();
    let writer = std::thread::spawn(move || {
        if let Some(mut stdin) = stdin {
            // A command may exit without reading its input.
            let _ = stdin.write_all(input.as_bytes());
        }
    });
    let stdout_reader = drain(child.stdout.take());
    let stderr_reader = drain(child.stderr.take());

    let (exit_code, timed_out) = wait_with_timeout(&mut child, timeout)?;

    let _ = writer.join();
    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    Ok(CommandOutput {
        exit_code,
        timed_out,
        stdout,
        stderr,
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    std::thread::spawn(move || {
        let mut bytes = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut bytes);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

/// Wait for a child process with timeout.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<(Option<i32>, bool)> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok((status.code(), false)),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    // SIGKILL on Unix, TerminateProcess on Windows.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok((None, true));
                }
                std::thread::sleep(poll_interval);
            }
            Err(e) => {
                return Err(AppError::AssistantError(format!(
                    "failed to check assistant command status: {}",
                    e
                )));
            }
        }
    }
}

/// The last `limit` characters of `text`.
fn tail(text: &str, limit: usize) -> &str {
    let count = text.chars().count();
    match text.char_indices().nth(count.saturating_sub(limit)) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
