//! Loading path lists from files.
//!
//! A file is read either as a JSON array of strings, when its first
//! non-whitespace character is `[`, or as one path per line with blank lines
//! ignored.

use crate::error::PathTreeError;
use crate::tree::json_paths;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Sample list used when no paths are supplied.
pub const DEMO_PATHS: [&str; 5] = [
    "/home/user/folder1/folder2/kdh4kdk8.txt",
    "/home/user/folder1/folder2/565shdhh.txt",
    "/home/user/folder1/folder2/folder3/nhskkuu4.txt",
    "/home/user/folder1/iiskjksd.txt",
    "/home/user/folder1/folder2/folder3/owjekksu.txt",
];

/// Parses a path list from text.
///
/// # Errors
///
/// Returns [`PathTreeError::Json`] for malformed JSON and
/// [`PathTreeError::InvalidInput`] when a JSON element is not a string.
pub fn parse_paths(content: &str) -> Result<Vec<String>, PathTreeError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(trimmed)?;
        let paths = json_paths(&value)?;
        return Ok(paths.into_iter().map(str::to_string).collect());
    }
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads and parses a path list file.
///
/// # Errors
///
/// Returns [`PathTreeError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_paths`].
pub fn load_paths(path: impl AsRef<Path>) -> Result<Vec<String>, PathTreeError> {
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Loading paths from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| PathTreeError::io(path, e))?;
    parse_paths(&content)
}
