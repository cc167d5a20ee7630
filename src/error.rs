//! Error types for the quickreply CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The placeholder engine never produces errors; everything here belongs to the
//! collaborators around it (store, assistant, clipboard) and the CLI layer.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for quickreply operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// User provided invalid arguments or referenced something that does not exist.
    #[error("{0}")]
    UserError(String),

    /// A template draft failed validation; nothing was saved.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Configuration is invalid or a required credential is missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading or writing persisted state failed.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// The content assistant call failed.
    #[error("Content assistant failed: {0}")]
    AssistantError(String),

    /// Neither clipboard representation could be written.
    #[error("Clipboard write failed: {0}")]
    ClipboardError(String),
}

impl AppError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UserError(_) => exit_codes::USER_ERROR,
            AppError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            AppError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            AppError::StorageError(_) => exit_codes::STORAGE_FAILURE,
            AppError::AssistantError(_) => exit_codes::ASSISTANT_FAILURE,
            AppError::ClipboardError(_) => exit_codes::CLIPBOARD_FAILURE,
        }
    }
}

/// Result type alias for quickreply operations.
pub type Result<T> = std::result::Result<T, AppError>;
