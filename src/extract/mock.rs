//! Mock extractors for testing purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{DocumentExtractor, ExtractError, WebExtractor};

/// A document extractor that returns predefined text keyed by file name.
///
/// Files without configured text fail with [`ExtractError::Archive`]. Every
/// call is recorded, so tests can assert which sources were touched.
#[derive(Debug, Default)]
pub struct MockDocumentExtractor {
    texts: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockDocumentExtractor {
    /// Create a new mock extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text returned for files named `file_name`.
    pub fn set_text(&self, file_name: &str, text: &str) {
        let mut guard = self.texts.lock().unwrap();
        guard.insert(file_name.to_string(), text.to_string());
    }

    /// Paths passed to `extract`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl DocumentExtractor for MockDocumentExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        self.calls.lock().unwrap().push(path.to_path_buf());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let guard = self.texts.lock().unwrap();
        guard
            .get(&name)
            .cloned()
            .ok_or_else(|| ExtractError::Archive(format!("no mock text for {}", name)))
    }
}

/// A web extractor that returns one predefined response.
#[derive(Debug, Default)]
pub struct MockWebExtractor {
    response: Mutex<Option<Result<String, u16>>>,
    calls: Mutex<Vec<String>>,
}

impl MockWebExtractor {
    /// Create a new mock extractor; it fails with a 404 until configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `text` for every URL.
    pub fn set_text(&self, text: &str) {
        *self.response.lock().unwrap() = Some(Ok(text.to_string()));
    }

    /// Fail every URL with the given HTTP status.
    pub fn set_status(&self, status: u16) {
        *self.response.lock().unwrap() = Some(Err(status));
    }

    /// URLs passed to `extract`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebExtractor for MockWebExtractor {
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        self.calls.lock().unwrap().push(url.to_string());

        let guard = self.response.lock().unwrap();
        match &*guard {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(status)) => Err(ExtractError::Status(*status)),
            None => Err(ExtractError::Status(404)),
        }
    }
}
