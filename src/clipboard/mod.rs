//! Clipboard output for filled templates.
//!
//! A copy offers two representations: the filled markup (rich text) and its
//! plain-text projection. When the rich write is not possible the plain text
//! is written on its own, so a copy only fails when both writes fail.

mod system;

use crate::engine;
use crate::error::{AppError, Result};

pub use system::SystemClipboard;

/// The two representations of a filled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    /// Filled markup.
    pub html: String,
    /// Plain-text projection of `html`.
    pub plain: String,
}

impl ClipboardPayload {
    pub fn from_markup(html: String) -> Self {
        let plain = engine::to_plain_text(&html);
        Self { html, plain }
    }
}

/// Which representation ended up on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Rich,
    PlainOnly,
}

/// A destination for clipboard payloads.
pub trait ClipboardWriter {
    /// Offer the markup and its plain text together, so the receiver may pick either.
    fn write_rich(&self, payload: &ClipboardPayload) -> Result<()>;

    /// Write plain text only.
    fn write_plain(&self, text: &str) -> Result<()>;
}

/// Copy `payload`, falling back to plain text when the rich write fails.
pub fn copy_payload<W: ClipboardWriter + ?Sized>(
    writer: &W,
    payload: &ClipboardPayload,
) -> Result<CopyOutcome> {
    match writer.write_rich(payload) {
        Ok(()) => Ok(CopyOutcome::Rich),
        Err(rich_err) => {
            tracing::info!(error = %rich_err, "rich clipboard write failed, falling back to plain text");
            writer.write_plain(&payload.plain).map_err(|plain_err| {
                AppError::ClipboardError(format!(
                    "rich write failed ({}); plain-text write failed ({})",
                    rich_err, plain_err
                ))
            })?;
            Ok(CopyOutcome::PlainOnly)
        }
    }
}
