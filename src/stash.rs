//! The stash facade.
//!
//! [`Stash`] is the single API surface callers use: the core file
//! operations pass through to an injected [`StorageBackend`], while the
//! facade owns the archive-name derivation policy and the
//! default-settings convenience layer.

use crate::error::Result;
use crate::settings::settings_key;
use crate::storage::StorageBackend;
use chrono::{DateTime, Local};
use std::path::Path;

/// Timestamp format used in archive stamp names.
///
/// Millisecond precision; two archives of the same file within one
/// millisecond produce the same stamp name, and the newer entry replaces
/// the older ("last write wins").
pub const ARCHIVE_STAMP_FORMAT: &str = "%Y-%m-%d [%H %M %S %3f]";

/// Source of the current local time.
///
/// The facade captures the timestamp once per archive call through this
/// trait, so tests can pin the clock and force stamp-name collisions.
pub trait Clock: Send + Sync {
    /// Returns the current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock [`Clock`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Capability-oriented facade over a storage backend.
///
/// Adds naming conventions (timestamp-stamped archive names, settings
/// filename derivation) and delegates all path and file mechanics to the
/// backend. The facade performs no validation of its own; identifiers
/// are checked by the backend before any path is formed.
///
/// # Examples
///
/// ```no_run
/// use stash_rs::{FsStorage, Stash};
///
/// let stash = Stash::new(FsStorage::open_default().unwrap());
/// stash.save("note.txt", "remember the milk").unwrap();
/// assert!(stash.archive("note.txt").unwrap());
/// ```
pub struct Stash<S> {
    /// Injected storage backend.
    backend: S,
    /// Timestamp source for archive stamp names.
    clock: Box<dyn Clock>,
}

impl<S: StorageBackend> Stash<S> {
    /// Creates a stash over the given backend using the wall clock.
    pub fn new(backend: S) -> Self {
        Self::with_clock(backend, Box::new(SystemClock))
    }

    /// Creates a stash with an explicit clock.
    ///
    /// Used by tests that need deterministic stamp names.
    pub fn with_clock(backend: S, clock: Box<dyn Clock>) -> Self {
        Self { backend, clock }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Checks whether a file exists in the active namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot answer.
    pub fn exists(&self, file_id: &str) -> Result<bool> {
        self.backend.exists(file_id)
    }

    /// Lists the filenames currently in the active namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if enumeration fails.
    pub fn files(&self) -> Result<Vec<String>> {
        self.backend.files()
    }

    /// Saves a file, overwriting any existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save(&self, file_id: &str, data: &str) -> Result<()> {
        self.backend.save(file_id, data)
    }

    /// Loads the full content of a file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StorageError::NotFound`] if the file does
    /// not exist.
    pub fn load(&self, file_id: &str) -> Result<String> {
        self.backend.load(file_id)
    }

    /// Deletes a file, returning `Ok(false)` if it was already absent.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be removed.
    pub fn delete(&self, file_id: &str) -> Result<bool> {
        self.backend.delete(file_id)
    }

    /// Retires a file into the archive namespace under a stamp name.
    ///
    /// The stamp name is `{stem}-{timestamp}{extension}`, with the local
    /// timestamp captured once per call. Returns `Ok(false)` if the file
    /// does not exist in the active namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the move fails.
    pub fn archive(&self, file_id: &str) -> Result<bool> {
        let name = stamp_name(file_id, &self.clock.now());
        self.backend.move_to_archive(file_id, &name)
    }

    /// Checks whether default settings exist for a class.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot answer.
    pub fn has_default_settings(&self, class: &str, id: &str) -> Result<bool> {
        self.exists(&settings_key(class, id))
    }

    /// Loads the default settings blob for a class.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StorageError::NotFound`] if no settings
    /// have been saved for the class.
    pub fn load_default_settings(&self, class: &str, id: &str) -> Result<String> {
        self.load(&settings_key(class, id))
    }

    /// Saves the default settings blob for a class.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_default_settings(&self, class: &str, id: &str, data: &str) -> Result<()> {
        self.save(&settings_key(class, id), data)
    }
}

/// Derives the archive stamp name for a file identifier.
///
/// `note.txt` archived at 2015-04-13 10:02:58.427 becomes
/// `note-2015-04-13 [10 02 58 427].txt`. Identifiers without an extension
/// get the stamp appended to the whole name.
#[must_use]
pub fn stamp_name(file_id: &str, at: &DateTime<Local>) -> String {
    let path = Path::new(file_id);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{stem}-{}{ext}", at.format(ARCHIVE_STAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use chrono::TimeZone;

    fn at(millis: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2015, 4, 13, 10, 2, 58)
            .single()
            .expect("valid timestamp")
            + chrono::Duration::milliseconds(i64::from(millis))
    }

    #[test]
    fn test_stamp_name_with_extension() {
        assert_eq!(
            stamp_name("note.txt", &at(427)),
            "note-2015-04-13 [10 02 58 427].txt"
        );
    }

    #[test]
    fn test_stamp_name_without_extension() {
        assert_eq!(
            stamp_name("note", &at(5)),
            "note-2015-04-13 [10 02 58 005]"
        );
    }

    #[test]
    fn test_stamp_name_collides_within_millisecond() {
        assert_eq!(stamp_name("a.txt", &at(1)), stamp_name("a.txt", &at(1)));
        assert_ne!(stamp_name("a.txt", &at(1)), stamp_name("a.txt", &at(2)));
    }
}
