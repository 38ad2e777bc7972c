//! Search request model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::{is_blank_path, non_blank, validate_pattern, validate_sources, ValidationError};

/// One user-initiated search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Regular expression to search for (case-insensitive)
    pub pattern: String,

    /// Folder whose documents are scanned (not recursive)
    pub folder: Option<PathBuf>,

    /// Web page whose text is scanned
    pub url: Option<String>,

    /// Match `pattern` as plain text rather than a regular expression
    #[serde(default)]
    pub literal: bool,
}

impl SearchRequest {
    /// Create a new request with no sources
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    /// Set the folder to scan; a blank path clears it.
    ///
    /// Any other path is kept as given, surrounding spaces included.
    pub fn folder(mut self, folder: impl AsRef<Path>) -> Self {
        let folder = folder.as_ref();
        self.folder = (!is_blank_path(folder)).then(|| folder.to_path_buf());
        self
    }

    /// Set the URL to fetch; a blank URL clears it
    pub fn url(mut self, url: impl AsRef<str>) -> Self {
        self.url = non_blank(Some(url.as_ref()));
        self
    }

    /// Match the pattern as plain text
    pub fn literal(mut self, literal: bool) -> Self {
        self.literal = literal;
        self
    }

    /// Check the request before any source is touched.
    ///
    /// An empty pattern is reported before a missing source.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_pattern(&self.pattern)?;
        validate_sources(self.folder_source(), self.url_source())
    }

    /// The folder to scan, unless it is missing or blank
    pub fn folder_source(&self) -> Option<&Path> {
        self.folder.as_deref().filter(|p| !is_blank_path(p))
    }

    /// The URL to fetch, trimmed, unless it is missing or blank
    pub fn url_source(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}
