//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Outcome of a boolean operation (exists/delete/archive).
#[derive(Serialize)]
struct FlagOutcome<'a> {
    /// Operation name.
    op: &'a str,
    /// File identifier the operation applied to.
    file_id: &'a str,
    /// Operation result.
    result: bool,
}

/// Listing of the active namespace.
#[derive(Serialize)]
struct FileList<'a> {
    /// Bare filenames.
    files: &'a [String],
    /// Number of files.
    count: usize,
}

/// Saved-file acknowledgement.
#[derive(Serialize)]
struct SaveOutcome<'a> {
    /// File identifier written.
    file_id: &'a str,
    /// Bytes written.
    bytes: usize,
}

/// Loaded file content.
#[derive(Serialize)]
struct Content<'a> {
    /// File content.
    content: &'a str,
}

fn format_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)
        .map_err(crate::error::CommandError::from)?;
    out.push('\n');
    Ok(out)
}

/// Formats a boolean operation result.
pub fn format_flag(op: &str, file_id: &str, result: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{result}\n")),
        OutputFormat::Json => format_json(&FlagOutcome { op, file_id, result }),
    }
}

/// Formats the active-namespace file listing.
pub fn format_file_list(files: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for file in files {
                let _ = writeln!(out, "{file}");
            }
            Ok(out)
        }
        OutputFormat::Json => format_json(&FileList {
            files,
            count: files.len(),
        }),
    }
}

/// Formats a save acknowledgement.
pub fn format_saved(file_id: &str, bytes: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Saved {file_id} ({bytes} bytes)\n")),
        OutputFormat::Json => format_json(&SaveOutcome { file_id, bytes }),
    }
}

/// Formats loaded file content.
pub fn format_content(content: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(content.to_string()),
        OutputFormat::Json => format_json(&Content { content }),
    }
}

/// Formats an error for the selected output format.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            // Hand-rolled to stay infallible on the error path.
            format!(
                "{{\"error\": {}}}",
                serde_json::Value::String(err.to_string())
            )
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::StorageError;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Text);
    }

    #[test]
    fn test_format_flag_text() {
        let out = format_flag("delete", "a.txt", true, OutputFormat::Text)
            .expect("format failed");
        assert_eq!(out, "true\n");
    }

    #[test]
    fn test_format_flag_json() {
        let out = format_flag("archive", "a.txt", false, OutputFormat::Json)
            .expect("format failed");
        assert!(out.contains("\"op\": \"archive\""));
        assert!(out.contains("\"result\": false"));
    }

    #[test]
    fn test_format_file_list_text() {
        let files = vec!["a".to_string(), "b".to_string()];
        let out = format_file_list(&files, OutputFormat::Text).expect("format failed");
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_format_file_list_json() {
        let files = vec!["a".to_string()];
        let out = format_file_list(&files, OutputFormat::Json).expect("format failed");
        assert!(out.contains("\"count\": 1"));
    }

    #[test]
    fn test_format_error_json_is_valid() {
        let err = Error::Storage(StorageError::NotFound {
            file_id: "x \"quoted\"".to_string(),
        });
        let out = format_error(&err, OutputFormat::Json);
        let parsed: serde_json::Value =
            serde_json::from_str(&out).expect("error output should be valid JSON");
        assert!(parsed["error"].is_string());
    }
}
