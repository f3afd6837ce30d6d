//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stash-rs: local-disk blob stash with timestamped archival.
///
/// Stores named text blobs under a base directory and retires them into
/// an archive namespace under timestamp-stamped names.
#[derive(Parser, Debug)]
#[command(name = "stash-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory holding the active and archive namespaces.
    ///
    /// Defaults to the platform documents directory.
    #[arg(short, long, env = "STASH_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a file, overwriting any existing content.
    Save {
        /// File identifier (a single path component).
        file_id: String,

        /// Content to store; read from stdin when omitted.
        data: Option<String>,
    },

    /// Print the content of a file.
    Load {
        /// File identifier.
        file_id: String,
    },

    /// List the files in the active namespace.
    #[command(name = "list", alias = "ls")]
    List,

    /// Check whether a file exists.
    Exists {
        /// File identifier.
        file_id: String,
    },

    /// Delete a file.
    #[command(name = "delete", alias = "rm")]
    Delete {
        /// File identifier.
        file_id: String,
    },

    /// Retire a file into the archive namespace under a stamp name.
    Archive {
        /// File identifier.
        file_id: String,
    },

    /// Default-settings layer (one blob per class).
    #[command(subcommand)]
    Settings(SettingsCommands),
}

/// Default-settings subcommands.
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Check whether default settings exist for a class.
    Has {
        /// Class (type/category) name.
        class: String,

        /// Instance id; currently not part of the derived filename.
        #[arg(long, default_value = "")]
        id: String,
    },

    /// Print the default settings blob for a class.
    Get {
        /// Class (type/category) name.
        class: String,

        /// Instance id; currently not part of the derived filename.
        #[arg(long, default_value = "")]
        id: String,
    },

    /// Save the default settings blob for a class.
    Set {
        /// Class (type/category) name.
        class: String,

        /// Content to store; read from stdin when omitted.
        data: Option<String>,

        /// Instance id; currently not part of the derived filename.
        #[arg(long, default_value = "")]
        id: String,
    },
}
