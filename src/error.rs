//! Error types for stash operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! stash operations including storage, archival, and CLI commands.

use thiserror::Error;

/// Result type alias for stash operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for stash operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage-related errors (file operations).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Storage-specific errors for file operations.
///
/// A missing file on `delete` or `archive` is not an error (those report
/// `Ok(false)`); only `load` treats absence as a failure.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File not found in the active namespace.
    #[error("file not found: {file_id}")]
    NotFound {
        /// Identifier that was not found.
        file_id: String,
    },

    /// File identifier rejected before path resolution.
    ///
    /// Identifiers must be a single path component: no separators, no
    /// parent-directory references, non-empty.
    #[error("invalid file id: {file_id}")]
    InvalidFileId {
        /// Identifier that was rejected.
        file_id: String,
    },

    /// Failed to read a file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write a file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to delete a file that exists.
    #[error("failed to delete file: {path}: {reason}")]
    DeleteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to move a file into the archive namespace.
    #[error("failed to move {from} to {to}: {reason}")]
    MoveFailed {
        /// Source path.
        from: String,
        /// Destination path.
        to: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to enumerate a namespace directory.
    #[error("failed to list directory: {path}: {reason}")]
    ListFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Namespace directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
