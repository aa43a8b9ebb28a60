//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Standardized missing/null value handling.
//! - Cell text for JSON values.
//! - Writing output to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Format-specific layout (lives in the respective formatter modules).

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::NamedTempFile;

use super::OutputFormat;

/// Representation of missing, null or empty values in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

pub fn format_missing(opt: Option<&str>) -> &str {
    match opt {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_MISSING_VALUE,
    }
}

/// Single-cell text for a JSON value.
pub fn format_json_value(value: &Value) -> String {
    match value {
        Value::Null => DEFAULT_MISSING_VALUE.to_string(),
        Value::String(s) if s.is_empty() => DEFAULT_MISSING_VALUE.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Print `output` to stdout, or write it to `output_file` when given.
pub fn output_result(
    output: &str,
    format: OutputFormat,
    output_file: Option<&std::path::PathBuf>,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Write via a temp file in the target directory, then rename over `path`.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to move output into place: {}", path.display()))?;
    Ok(())
}
