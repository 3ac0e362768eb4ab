//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure, plus
//! the generic file-removal utility exposed through the menu.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{RosterError, RosterResult};

/// Write a file atomically (write to temp, then rename)
///
/// The target is either completely written or left untouched. `write_fn`
/// receives the buffered writer for the temp file.
pub fn write_atomic<F>(path: &Path, write_fn: F) -> RosterResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> RosterResult<()>,
{
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RosterError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in same directory (important for atomic rename)
    let mut temp_extension = path
        .extension()
        .map(|ext| ext.to_os_string())
        .unwrap_or_default();
    temp_extension.push(".tmp");
    let temp_path = path.with_extension(temp_extension);

    let file = File::create(&temp_path)
        .map_err(|e| RosterError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    write_fn(&mut writer)?;

    writer
        .flush()
        .map_err(|e| RosterError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| RosterError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        RosterError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Delete an arbitrary file
///
/// Returns a not-found error (and changes nothing) when the path does not
/// exist.
pub fn delete_file(path: &Path) -> RosterResult<()> {
    if !path.exists() {
        return Err(RosterError::file_not_found(path.display().to_string()));
    }

    fs::remove_file(path).map_err(|e| {
        RosterError::Storage(format!("Failed to delete {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        write_atomic(&path, |w| {
            w.write_all(b"hello")
                .map_err(|e| RosterError::Io(e.to_string()))
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let temp_path = temp_dir.path().join("out.csv.tmp");

        write_atomic(&path, |w| {
            w.write_all(b"data")
                .map_err(|e| RosterError::Io(e.to_string()))
        })
        .unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        fs::write(&path, "old contents").unwrap();

        write_atomic(&path, |w| {
            w.write_all(b"new")
                .map_err(|e| RosterError::Io(e.to_string()))
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_delete_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("victim.txt");
        fs::write(&path, "bye").unwrap();

        delete_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_file_reports_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = delete_file(&path).unwrap_err();
        assert!(err.is_not_found());
        assert!(!path.exists());
    }
}
