use crate::context::AppContext;
use std::ffi::{OsStr, OsString};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets an environment variable for the lifetime of the guard.
pub(crate) struct EnvGuard {
    key: String,
    original: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn set<V: AsRef<OsStr>>(key: &str, value: V) -> Self {
        // The process environment is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::var_os(key);
        unsafe { std::env::set_var(key, value) };
        Self {
            key: key.to_string(),
            original,
            _lock: lock,
        }
    }

    pub(crate) fn unset(key: &str) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::var_os(key);
        unsafe { std::env::remove_var(key) };
        Self {
            key: key.to_string(),
            original,
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => unsafe { std::env::set_var(&self.key, value) },
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}

/// A context rooted in a fresh temp directory with default config.
pub(crate) fn create_test_context() -> (TempDir, AppContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = AppContext::from_dir(temp_dir.path()).unwrap();
    (temp_dir, ctx)
}

/// Like [`create_test_context`], with `config.yaml` written first.
pub(crate) fn create_test_context_with_config(yaml: &str) -> (TempDir, AppContext) {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.yaml"), yaml).unwrap();
    let ctx = AppContext::from_dir(temp_dir.path()).unwrap();
    (temp_dir, ctx)
}
