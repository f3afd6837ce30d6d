//! Storage backend trait definition.
//!
//! Defines the interface for stash storage backends, enabling pluggable
//! implementations and straightforward test doubles.

use crate::error::Result;
use crate::storage::{ACTIVE_DIR_NAME, ARCHIVE_DIR_NAME};

/// The two fixed namespaces a file can live in.
///
/// Active holds currently-live files; archive holds timestamped, retired
/// copies of files removed from active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Currently-live files.
    Active,
    /// Timestamped, retired files.
    Archive,
}

impl Namespace {
    /// Returns the fixed directory name for this namespace.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Active => ACTIVE_DIR_NAME,
            Self::Archive => ARCHIVE_DIR_NAME,
        }
    }
}

/// Trait for stash storage backends.
///
/// Implementations map `(Namespace, file_id)` pairs to storage locations
/// and perform the primitive create/read/write/delete/list/move
/// operations. All operations are synchronous and run to completion or
/// fail immediately; no retries are performed at this layer.
///
/// Implementations must reject file identifiers that are not a single
/// path component before touching storage.
///
/// # Examples
///
/// ```no_run
/// use stash_rs::storage::{FsStorage, StorageBackend};
///
/// let storage = FsStorage::new("/tmp/stash");
/// storage.save("note.txt", "hello").unwrap();
/// assert!(storage.exists("note.txt").unwrap());
/// ```
pub trait StorageBackend: Send + Sync {
    /// Checks whether a regular file exists in the active namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is invalid or the namespace
    /// directory cannot be created.
    fn exists(&self, file_id: &str) -> Result<bool>;

    /// Lists the bare filenames of regular files in the active namespace.
    ///
    /// The result is a fresh snapshot in directory-enumeration order; no
    /// ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be enumerated.
    fn files(&self) -> Result<Vec<String>>;

    /// Loads the full content of a file from the active namespace.
    ///
    /// The underlying handle is fully consumed and closed before this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StorageError::NotFound`] if the file does
    /// not exist, or a read error otherwise.
    fn load(&self, file_id: &str) -> Result<String>;

    /// Creates or truncates a file in the active namespace and writes
    /// `data` in full.
    ///
    /// Overwrites any existing file with the same identifier; there is no
    /// versioning and no partial-write recovery.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&self, file_id: &str, data: &str) -> Result<()>;

    /// Deletes a file from the active namespace.
    ///
    /// Returns `Ok(false)` without error if the file is already absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    fn delete(&self, file_id: &str) -> Result<bool>;

    /// Moves a file from the active namespace to the archive namespace
    /// under `archive_name`.
    ///
    /// Returns `Ok(false)` if `file_id` does not exist in active. If a
    /// file already exists at the archive destination it is deleted first
    /// (overwrite semantics). This is a move, not a copy: on success the
    /// active entry no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if either identifier is invalid or the move
    /// fails.
    fn move_to_archive(&self, file_id: &str, archive_name: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_dir_names() {
        assert_eq!(Namespace::Active.dir_name(), "DataStorage");
        assert_eq!(Namespace::Archive.dir_name(), "DataArchive");
    }
}
