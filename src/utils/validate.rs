//! Input validation for search requests.
//!
//! Validation runs before any file or network I/O: a request that fails
//! here never touches a source.

use std::path::Path;
use thiserror::Error;

/// Validation error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty search pattern: please enter a word or phrase to search for")]
    EmptyPattern,

    #[error("No source: please provide a folder path or a URL")]
    NoSource,
}

/// Check that the search pattern is not empty.
///
/// The pattern itself is not trimmed: leading or trailing spaces are part of
/// what the user asked to find. A pattern made only of whitespace is still a
/// valid (if odd) pattern.
pub fn validate_pattern(pattern: &str) -> Result<(), ValidationError> {
    if pattern.is_empty() {
        return Err(ValidationError::EmptyPattern);
    }
    Ok(())
}

/// Check that at least one source is configured.
///
/// Empty or whitespace-only values count as absent.
pub fn validate_sources(folder: Option<&Path>, url: Option<&str>) -> Result<(), ValidationError> {
    let folder = folder.filter(|p| !is_blank_path(p));
    let url = url.filter(|u| !u.trim().is_empty());
    if folder.is_none() && url.is_none() {
        return Err(ValidationError::NoSource);
    }
    Ok(())
}

/// True for an empty or whitespace-only path
pub fn is_blank_path(path: &Path) -> bool {
    path.to_str().is_some_and(|s| s.trim().is_empty())
}

/// Trim an optional text input, treating blank values as absent.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Normalize a file extension filter: strips a leading `*.` or `.`
///
/// Returns `None` when nothing is left.
pub fn normalize_extension(extension: &str) -> Option<String> {
    let ext = extension.trim();
    let ext = ext.strip_prefix("*").unwrap_or(ext);
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() || ext.contains(['/', '\\']) {
        None
    } else {
        Some(ext.to_string())
    }
}
