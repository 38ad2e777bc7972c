//! Text extractors for the two kinds of search source.
//!
//! This module defines the [`DocumentExtractor`] and [`WebExtractor`] traits.
//! The aggregator only talks to these traits, so other front ends (or tests)
//! can plug in their own extractors.
//!
//! - [`DocxExtractor`]: visible paragraph text of a `.docx` file
//! - [`WebPageExtractor`]: visible text of an HTML page fetched over HTTP
//! - [`MockDocumentExtractor`], [`MockWebExtractor`]: canned responses for tests

mod docx;
pub mod mock;
mod web;

pub use docx::DocxExtractor;
pub use mock::{MockDocumentExtractor, MockWebExtractor};
pub use web::{html_to_text, WebPageExtractor, HIDDEN_ELEMENTS};

#[cfg(test)]
pub(crate) use docx::write_test_docx;

use async_trait::async_trait;
use std::path::Path;

/// Extracts plain text from a document on disk.
///
/// Callers filter by file type before calling; implementations may assume
/// the path names a document of the format they understand.
pub trait DocumentExtractor: Send + Sync + std::fmt::Debug {
    /// Return the text of the document, paragraphs separated by `\n`
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Fetches a web page and extracts its visible text.
#[async_trait]
pub trait WebExtractor: Send + Sync + std::fmt::Debug {
    /// Return the text content of the page with markup removed
    async fn extract(&self, url: &str) -> Result<String, ExtractError>;
}

/// Errors that can occur while extracting text from one source
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable document container
    #[error("Invalid document archive: {0}")]
    Archive(String),

    /// The document body is not well-formed XML
    #[error("Malformed document XML: {0}")]
    Xml(String),

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be read or decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        ExtractError::Network(err.to_string())
    }
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => ExtractError::Io(e),
            other => ExtractError::Archive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractError::Xml(err.to_string())
    }
}
