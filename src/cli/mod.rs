//! CLI layer for the stash.
//!
//! Provides the command-line interface using clap, with commands for
//! saving, loading, enumerating, deleting, and archiving files, plus the
//! default-settings layer.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands, SettingsCommands};
