//! Atomic file replacement.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! On POSIX `rename()` replaces the destination atomically when source and
//! destination share a filesystem, which holds because the temporary file is
//! created next to the target. On Windows `rename` also replaces an existing
//! destination (it maps to `MoveFileExW` with `MOVEFILE_REPLACE_EXISTING`).
//!
//! A crash between steps can leave a stray `.{filename}.{suffix}.tmp` file
//! behind; the target itself is always either the old or the new content.

use crate::error::{AppError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::StorageError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "atomic write complete");
    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path next to the target.
///
/// A random suffix keeps two concurrent writers from sharing a temp file.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AppError::StorageError(format!("invalid file path '{}'", target.display()))
        })?;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    Ok(parent.join(format!(".{}.{}.tmp", filename, &suffix[..8])))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        AppError::StorageError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(AppError::StorageError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        AppError::StorageError(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    sync_parent(target);
    Ok(())
}

/// Persist the directory entry for `target`.
#[cfg(unix)]
fn sync_parent(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_target: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("templates.json");

        atomic_write(&file_path, b"{\"version\":1}").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "{\"version\":1}");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("templates.json");
        fs::write(&file_path, "original content").unwrap();

        atomic_write_file(&file_path, "new content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("home").join("config.yaml");

        atomic_write_file(&file_path, "store_file: templates.json\n").unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("templates.json");

        atomic_write(&file_path, b"one").unwrap();
        atomic_write(&file_path, b"two").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(entries, vec!["templates.json".to_string()]);
    }

    #[test]
    fn test_generate_temp_path_is_hidden_sibling() {
        let target = Path::new("/some/path/templates.json");
        let temp = generate_temp_path(target).unwrap();
        let name = temp.file_name().unwrap().to_str().unwrap();

        assert_eq!(temp.parent().unwrap(), Path::new("/some/path"));
        assert!(name.starts_with(".templates.json."));
        assert!(name.ends_with(".tmp"));
        assert_ne!(temp, generate_temp_path(target).unwrap());
    }

    #[test]
    fn test_atomic_write_unicode_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("templates.json");

        atomic_write_file(&file_path, "Chào {tên} 🎉").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Chào {tên} 🎉");
    }

    #[test]
    fn test_atomic_write_over_directory_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should go makes rename fail.
        let file_path = temp_dir.path().join("occupied");
        fs::create_dir(&file_path).unwrap();
        fs::write(file_path.join("inner"), "x").unwrap();

        let err = atomic_write(&file_path, b"data").unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));

        let leftovers = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_atomic_write_concurrent_different_files() {
        let temp_dir = TempDir::new().unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let path = temp_dir.path().join(format!("file_{}.json", i));
                let content = format!("content {}", i);
                std::thread::spawn(move || {
                    atomic_write_file(&path, &content).unwrap();
                    (path, content)
                })
            })
            .collect();

        for handle in handles {
            let (path, expected) = handle.join().unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        }
    }
}
