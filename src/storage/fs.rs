//! Filesystem storage implementation.
//!
//! Stores each file as a plain text file under
//! `<base>/DataStorage/<file_id>`, with archived files under
//! `<base>/DataArchive/<name>`. Namespace directories are created lazily
//! on first resolution.

use crate::error::{Error, Result, StorageError};
use crate::storage::traits::{Namespace, StorageBackend};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem-backed storage.
///
/// Maps file identifiers to paths inside the active and archive namespace
/// directories under a base directory, and performs the primitive file
/// operations with blocking I/O. The filesystem itself is the only shared
/// state; callers mutating the same identifier concurrently must
/// serialize externally.
///
/// # Examples
///
/// ```no_run
/// use stash_rs::storage::{FsStorage, StorageBackend};
///
/// let storage = FsStorage::open_default().unwrap();
/// storage.save("settings.xml", "<xml/>").unwrap();
/// ```
pub struct FsStorage {
    /// Base directory containing both namespace directories.
    base_dir: PathBuf,
}

impl FsStorage {
    /// Creates a storage rooted at the given base directory.
    ///
    /// The directory itself is not created here; namespace directories
    /// are created lazily on first use.
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Creates a storage rooted at the platform documents directory,
    /// falling back to the home directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if neither directory can be determined.
    pub fn open_default() -> Result<Self> {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| Error::Config {
                message: "could not determine a documents or home directory".to_string(),
            })?;
        Ok(Self::new(base))
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Validates that `file_id` is a single path component.
    ///
    /// Rejects empty identifiers, separators, NUL bytes, and `.`/`..`, so
    /// a resolved path can never escape its namespace directory.
    fn validate_file_id(file_id: &str) -> Result<()> {
        let invalid = file_id.is_empty()
            || file_id == "."
            || file_id == ".."
            || file_id.contains(['/', '\\', '\0']);
        if invalid {
            return Err(StorageError::InvalidFileId {
                file_id: file_id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Returns the namespace directory, creating it if missing.
    ///
    /// Creation is idempotent; an existing directory is not an error.
    fn namespace_dir(&self, namespace: Namespace) -> Result<PathBuf> {
        let dir = self.base_dir.join(namespace.dir_name());
        fs::create_dir_all(&dir).map_err(|e| StorageError::DirectoryFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(dir)
    }

    /// Resolves a validated identifier to a path inside a namespace.
    fn resolve(&self, namespace: Namespace, file_id: &str) -> Result<PathBuf> {
        Self::validate_file_id(file_id)?;
        Ok(self.namespace_dir(namespace)?.join(file_id))
    }
}

impl StorageBackend for FsStorage {
    fn exists(&self, file_id: &str) -> Result<bool> {
        let path = self.resolve(Namespace::Active, file_id)?;
        Ok(path.is_file())
    }

    fn files(&self) -> Result<Vec<String>> {
        let dir = self.namespace_dir(Namespace::Active)?;
        let entries = fs::read_dir(&dir).map_err(|e| StorageError::ListFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::ListFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let is_file = entry
                .file_type()
                .map_err(|e| StorageError::ListFailed {
                    path: entry.path().display().to_string(),
                    reason: e.to_string(),
                })?
                .is_file();
            if is_file {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn load(&self, file_id: &str) -> Result<String> {
        let path = self.resolve(Namespace::Active, file_id)?;
        if !path.is_file() {
            return Err(StorageError::NotFound {
                file_id: file_id.to_string(),
            }
            .into());
        }
        fs::read_to_string(&path).map_err(|e| {
            StorageError::ReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, file_id: &str, data: &str) -> Result<()> {
        let path = self.resolve(Namespace::Active, file_id)?;
        fs::write(&path, data).map_err(|e| StorageError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(file_id, bytes = data.len(), "saved file");
        Ok(())
    }

    fn delete(&self, file_id: &str) -> Result<bool> {
        let path = self.resolve(Namespace::Active, file_id)?;
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| StorageError::DeleteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(file_id, "deleted file");
        Ok(true)
    }

    fn move_to_archive(&self, file_id: &str, archive_name: &str) -> Result<bool> {
        let origin = self.resolve(Namespace::Active, file_id)?;
        if !origin.is_file() {
            return Ok(false);
        }

        let dest = self.resolve(Namespace::Archive, archive_name)?;
        // Same stamp name within one millisecond: last write wins.
        if dest.is_file() {
            fs::remove_file(&dest).map_err(|e| StorageError::DeleteFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        fs::rename(&origin, &dest).map_err(|e| StorageError::MoveFailed {
            from: origin.display().to_string(),
            to: dest.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(file_id, archive_name, "archived file");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::{Error, StorageError};
    use tempfile::TempDir;
    use test_case::test_case;

    fn create_test_storage() -> (FsStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FsStorage::new(temp_dir.path());
        (storage, temp_dir)
    }

    #[test]
    fn test_save_load_round_trip() {
        let (storage, _temp) = create_test_storage();

        storage.save("note.txt", "hello world").expect("save failed");
        let content = storage.load("note.txt").expect("load failed");
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_save_overwrites() {
        let (storage, _temp) = create_test_storage();

        storage.save("note.txt", "first").expect("save failed");
        storage.save("note.txt", "second").expect("save failed");
        assert_eq!(storage.load("note.txt").expect("load failed"), "second");
    }

    #[test]
    fn test_exists_lifecycle() {
        let (storage, _temp) = create_test_storage();

        assert!(!storage.exists("note.txt").expect("exists failed"));
        storage.save("note.txt", "data").expect("save failed");
        assert!(storage.exists("note.txt").expect("exists failed"));
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (storage, _temp) = create_test_storage();

        let err = storage.load("ghost.txt").expect_err("load should fail");
        assert!(matches!(
            err,
            Error::Storage(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_idempotence() {
        let (storage, _temp) = create_test_storage();

        storage.save("note.txt", "data").expect("save failed");
        assert!(storage.delete("note.txt").expect("delete failed"));
        assert!(!storage.delete("note.txt").expect("delete failed"));
        assert!(!storage.exists("note.txt").expect("exists failed"));
    }

    #[test]
    fn test_files_lists_bare_names() {
        let (storage, _temp) = create_test_storage();

        for id in ["a", "b", "c"] {
            storage.save(id, "x").expect("save failed");
        }
        storage.delete("b").expect("delete failed");

        let mut files = storage.files().expect("files failed");
        files.sort();
        assert_eq!(files, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_files_excludes_directories() {
        let (storage, temp) = create_test_storage();

        storage.save("a", "x").expect("save failed");
        fs::create_dir(temp.path().join("DataStorage").join("subdir"))
            .expect("mkdir failed");

        let files = storage.files().expect("files failed");
        assert_eq!(files, vec!["a".to_string()]);
    }

    #[test]
    fn test_move_to_archive() {
        let (storage, temp) = create_test_storage();

        storage.save("note.txt", "data").expect("save failed");
        let moved = storage
            .move_to_archive("note.txt", "note-stamped.txt")
            .expect("move failed");

        assert!(moved);
        assert!(!storage.exists("note.txt").expect("exists failed"));
        assert!(
            temp.path()
                .join("DataArchive")
                .join("note-stamped.txt")
                .is_file()
        );
    }

    #[test]
    fn test_move_to_archive_missing_origin() {
        let (storage, temp) = create_test_storage();

        let moved = storage
            .move_to_archive("ghost.txt", "ghost-stamped.txt")
            .expect("move failed");

        assert!(!moved);
        assert!(
            !temp
                .path()
                .join("DataArchive")
                .join("ghost-stamped.txt")
                .exists()
        );
    }

    #[test]
    fn test_move_to_archive_overwrites_destination() {
        let (storage, temp) = create_test_storage();
        let dest = temp.path().join("DataArchive").join("note-stamped.txt");

        storage.save("note.txt", "old").expect("save failed");
        assert!(
            storage
                .move_to_archive("note.txt", "note-stamped.txt")
                .expect("move failed")
        );
        storage.save("note.txt", "new").expect("save failed");
        assert!(
            storage
                .move_to_archive("note.txt", "note-stamped.txt")
                .expect("move failed")
        );

        assert_eq!(fs::read_to_string(&dest).expect("read failed"), "new");
    }

    #[test_case("" ; "empty")]
    #[test_case("." ; "dot")]
    #[test_case(".." ; "dotdot")]
    #[test_case("../evil" ; "parent traversal")]
    #[test_case("a/b" ; "separator")]
    #[test_case("a\\b" ; "backslash")]
    fn test_invalid_file_id_rejected(file_id: &str) {
        let (storage, temp) = create_test_storage();

        let err = storage.save(file_id, "x").expect_err("save should fail");
        assert!(matches!(
            err,
            Error::Storage(StorageError::InvalidFileId { .. })
        ));
        // Nothing outside the namespace may have been touched.
        assert!(!temp.path().join("evil").exists());
    }

    #[test]
    fn test_namespace_dirs_created_lazily() {
        let (storage, temp) = create_test_storage();

        assert!(!temp.path().join("DataStorage").exists());
        storage.save("a", "x").expect("save failed");
        assert!(temp.path().join("DataStorage").is_dir());
        assert!(!temp.path().join("DataArchive").exists());
    }
}
