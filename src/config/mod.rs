//! Configuration model for quickreply.
//!
//! This module defines the Config struct that represents `config.yaml` in the
//! data directory. It supports forward-compatible YAML parsing (unknown fields
//! are ignored), defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{AssistantConfig, AssistantProvider, ClipboardConfig};
