//! Filesystem utilities for quickreply.
//!
//! Persisted state (the template collection and the config file) is always
//! replaced atomically so a crash mid-write never leaves a truncated file.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
