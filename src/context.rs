//! Data directory resolution for quickreply.
//!
//! Every command locates its state through [`AppContext`]: the config file and
//! the template collection both live in one data directory.
//!
//! Resolution order:
//! 1. `$QUICKREPLY_HOME`, if set and non-empty
//! 2. The platform data directory joined with `quickreply`
//!    (e.g. `~/.local/share/quickreply` on Linux)

use crate::config::Config;
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "QUICKREPLY_HOME";

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "quickreply";

/// Config file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolved paths and configuration for a quickreply invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Absolute path to the data directory.
    pub data_dir: PathBuf,

    /// Loaded configuration (defaults when no config file exists).
    pub config: Config,
}

impl AppContext {
    /// Resolve the data directory from the environment and load its config.
    pub fn resolve() -> Result<Self> {
        let data_dir = match std::env::var(HOME_ENV) {
            Ok(home) if !home.trim().is_empty() => PathBuf::from(home),
            _ => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| {
                    AppError::ConfigError(format!(
                        "could not determine a data directory; set {} to choose one",
                        HOME_ENV
                    ))
                })?,
        };

        Self::from_dir(data_dir)
    }

    /// Build a context rooted at a specific directory.
    pub fn from_dir<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let config = Config::load_or_default(data_dir.join(CONFIG_FILE_NAME))?;
        tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
        Ok(Self { data_dir, config })
    }

    /// Path to `config.yaml`.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    /// Path to the template collection.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.store_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_from_dir_without_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = AppContext::from_dir(temp_dir.path()).unwrap();

        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.config_path(), temp_dir.path().join("config.yaml"));
        assert_eq!(ctx.store_path(), temp_dir.path().join("templates.json"));
    }

    #[test]
    fn test_store_path_follows_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.yaml"),
            "store_file: work/replies.json\n",
        )
        .unwrap();

        let ctx = AppContext::from_dir(temp_dir.path()).unwrap();
        assert_eq!(
            ctx.store_path(),
            temp_dir.path().join("work").join("replies.json")
        );
    }

    #[test]
    fn test_broken_config_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.yaml"), "store_file: ../x\n").unwrap();

        let err = AppContext::from_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    #[serial]
    fn test_resolve_honors_home_env() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = crate::test_support::EnvGuard::set(HOME_ENV, temp_dir.path());

        let ctx = AppContext::resolve().unwrap();
        assert_eq!(ctx.data_dir, temp_dir.path());
    }
}
