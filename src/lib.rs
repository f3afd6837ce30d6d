//! # stash-rs
//!
//! Local-disk blob stash for embedding applications.
//!
//! stash-rs stores named text blobs under a base directory, enumerates
//! and deletes them, and retires them into an archive namespace under
//! timestamp-stamped names. A thin default-settings layer stores one
//! settings blob per class on top of the same operations.
//!
//! ## Features
//!
//! - **Two namespaces**: active files and timestamped archived files
//! - **Pluggable backend**: the [`StorageBackend`] trait is injected into
//!   the [`Stash`] facade at construction
//! - **Archival policy**: stamp names at millisecond precision, last
//!   write wins on same-millisecond collisions
//! - **Hardened identifiers**: file ids are rejected unless they are a
//!   single path component

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;
pub mod stash;
pub mod storage;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export the facade and its clock seam
pub use stash::{ARCHIVE_STAMP_FORMAT, Clock, Stash, SystemClock, stamp_name};

// Re-export storage types
pub use storage::{ACTIVE_DIR_NAME, ARCHIVE_DIR_NAME, FsStorage, Namespace, StorageBackend};

// Re-export the settings-key derivation
pub use settings::{SETTINGS_SUFFIX, settings_key};

// Re-export logging sinks
pub use logging::{LogSink, PrefixLogger, TracingSink};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
