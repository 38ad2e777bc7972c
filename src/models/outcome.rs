//! Search outcome models.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

use crate::extract::ExtractError;

/// One source a search reads from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum SourceRef {
    /// A document file inside the searched folder
    Document(PathBuf),
    /// The searched folder itself, when it cannot be listed
    Folder(PathBuf),
    /// The searched web page
    Url(String),
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Document(path) => write!(f, "{}", path.display()),
            SourceRef::Folder(path) => write!(f, "folder {}", path.display()),
            SourceRef::Url(url) => write!(f, "{}", url),
        }
    }
}

/// A source that could not be read; the rest of the search went on without it
#[derive(Debug)]
pub struct ExtractionFailure {
    pub source: SourceRef,
    pub cause: ExtractError,
}

impl ExtractionFailure {
    pub fn new(source: SourceRef, cause: ExtractError) -> Self {
        Self { source, cause }
    }
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error extracting text from {}: {}", self.source, self.cause)
    }
}

impl Serialize for ExtractionFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtractionFailure", 2)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("cause", &self.cause.to_string())?;
        state.end()
    }
}

/// Result of one search
#[derive(Debug, Default, Serialize)]
pub struct SearchOutcome {
    /// Matched substrings, per source in search order
    pub matches: Vec<String>,

    /// Sources that were skipped because extraction failed
    pub failures: Vec<ExtractionFailure>,

    /// Number of sources whose text was extracted and scanned
    pub sources_searched: usize,
}

impl SearchOutcome {
    /// True when nothing matched (failures aside)
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Match at a 1-based position, as shown in listings
    pub fn selected(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.matches.get(i))
            .map(String::as_str)
    }
}
