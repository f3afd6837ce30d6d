//! CLI command implementations.
//!
//! Contains the business logic for each CLI command, dispatching onto a
//! [`Stash`] over filesystem storage.

use crate::cli::output::{
    OutputFormat, format_content, format_file_list, format_flag, format_saved,
};
use crate::cli::parser::{Cli, Commands, SettingsCommands};
use crate::error::{CommandError, Result};
use crate::logging::{PrefixLogger, TracingSink};
use crate::stash::Stash;
use crate::storage::FsStorage;
use std::io::Read;

/// Executes the CLI command.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let stash = open_stash(cli)?;
    let logger = PrefixLogger::new("stash: ", TracingSink);

    match &cli.command {
        Commands::Save { file_id, data } => {
            cmd_save(&stash, &logger, file_id, data.as_deref(), format)
        }
        Commands::Load { file_id } => format_content(&stash.load(file_id)?, format),
        Commands::List => format_file_list(&stash.files()?, format),
        Commands::Exists { file_id } => {
            format_flag("exists", file_id, stash.exists(file_id)?, format)
        }
        Commands::Delete { file_id } => {
            let deleted = stash.delete(file_id)?;
            logger.log(&format!("delete {file_id}: {deleted}"));
            format_flag("delete", file_id, deleted, format)
        }
        Commands::Archive { file_id } => {
            let archived = stash.archive(file_id)?;
            logger.log(&format!("archive {file_id}: {archived}"));
            format_flag("archive", file_id, archived, format)
        }
        Commands::Settings(settings) => match settings {
            SettingsCommands::Has { class, id } => format_flag(
                "settings-has",
                class,
                stash.has_default_settings(class, id)?,
                format,
            ),
            SettingsCommands::Get { class, id } => {
                format_content(&stash.load_default_settings(class, id)?, format)
            }
            SettingsCommands::Set { class, data, id } => {
                let data = resolve_data(data.as_deref())?;
                stash.save_default_settings(class, id, &data)?;
                logger.log(&format!("settings set {class}"));
                format_saved(class, data.len(), format)
            }
        },
    }
}

/// Opens the stash over the configured base directory.
fn open_stash(cli: &Cli) -> Result<Stash<FsStorage>> {
    let storage = match &cli.base_dir {
        Some(base) => FsStorage::new(base.clone()),
        None => FsStorage::open_default()?,
    };
    Ok(Stash::new(storage))
}

/// Returns the given data, or reads it from stdin when omitted.
fn resolve_data(data: Option<&str>) -> Result<String> {
    match data {
        Some(data) => Ok(data.to_string()),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CommandError::ExecutionFailed(format!("failed to read stdin: {e}")))?;
            Ok(buf)
        }
    }
}

fn cmd_save(
    stash: &Stash<FsStorage>,
    logger: &PrefixLogger<TracingSink>,
    file_id: &str,
    data: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let data = resolve_data(data)?;
    stash.save(file_id, &data)?;
    logger.log(&format!("save {file_id} ({} bytes)", data.len()));
    format_saved(file_id, data.len(), format)
}
