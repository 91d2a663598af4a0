//! Utilities for reading JSON5 documents into `serde_json::Value`s.
//!
//! Shapes and actual values given to the CLI are JSON5 files, so comments,
//! trailing commas and unquoted keys are all accepted. Member order is
//! preserved, which matters for shapes since it decides traversal order.

use std::path::Path;

use anyhow::Context as _;

/// Parse JSON5 text into a `serde_json::Value` with a custom context message.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON5.
pub fn parse_value_with_context(
    text: &str,
    context: impl Fn() -> String,
) -> anyhow::Result<serde_json::Value> {
    json5::from_str(text).with_context(|| format!("{}: JSON5 parse error", context()))
}

/// Read a JSON5 file from disk into a `serde_json::Value`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is not valid UTF-8
/// - The text is not valid JSON5
pub fn read_value(path: &Path) -> anyhow::Result<serde_json::Value> {
    let bytes = fs_err::read(path)?;
    let text = std::str::from_utf8(&bytes)
        .with_context(|| format!("{}: File is not valid UTF-8", path.display()))?;

    parse_value_with_context(text, || path.display().to_string())
}
