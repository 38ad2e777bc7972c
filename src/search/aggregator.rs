//! Runs one search across a folder of documents and a web page.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{Matcher, SearchError};
use crate::config::Settings;
use crate::extract::{
    DocumentExtractor, DocxExtractor, ExtractError, WebExtractor, WebPageExtractor,
};
use crate::models::{ExtractionFailure, SearchOutcome, SearchRequest, SourceRef};
use crate::utils::{normalize_extension, HttpClient};

/// Extension of the documents scanned by default
pub const DEFAULT_EXTENSION: &str = "docx";

/// Orchestrates extraction and matching for a [`SearchRequest`].
///
/// Sources are processed one after another: documents in folder-listing
/// order, then the URL. A source that fails to extract is recorded in the
/// outcome and skipped. Concurrent calls on the same aggregator wait for
/// each other.
#[derive(Debug)]
pub struct SearchAggregator {
    documents: Arc<dyn DocumentExtractor>,
    web: Arc<dyn WebExtractor>,
    extension: String,
    in_flight: Mutex<()>,
}

impl SearchAggregator {
    /// Create an aggregator over the given extractors
    pub fn new(documents: Arc<dyn DocumentExtractor>, web: Arc<dyn WebExtractor>) -> Self {
        Self {
            documents,
            web,
            extension: DEFAULT_EXTENSION.to_string(),
            in_flight: Mutex::new(()),
        }
    }

    /// Build the standard `.docx` + HTTP aggregator from settings
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = HttpClient::with_settings(&settings.web.user_agent, settings.web.timeout())?;
        let web = WebPageExtractor::new(Arc::new(client))
            .skip_hidden_elements(settings.web.skip_hidden_elements);

        Ok(Self::new(Arc::new(DocxExtractor::new()), Arc::new(web))
            .with_extension(&settings.search.extension))
    }

    /// Scan files with this extension instead of `docx`.
    ///
    /// Accepts `docx`, `.docx` or `*.docx`; an unusable value is ignored.
    pub fn with_extension(mut self, extension: &str) -> Self {
        match normalize_extension(extension) {
            Some(ext) => self.extension = ext,
            None => tracing::warn!("Ignoring invalid document extension '{}'", extension),
        }
        self
    }

    /// Extension of the documents scanned in a folder
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Run one search.
    ///
    /// Validation and pattern errors are returned before any source is read.
    /// Extraction failures never fail the search; they are listed in
    /// [`SearchOutcome::failures`]. Document extraction runs on tokio's
    /// blocking pool, so this must be awaited inside a tokio runtime.
    pub async fn run_search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        request.validate()?;
        let matcher = if request.literal {
            Matcher::literal(&request.pattern)?
        } else {
            Matcher::new(&request.pattern)?
        };

        let _guard = self.in_flight.lock().await;
        let mut outcome = SearchOutcome::default();

        if let Some(folder) = request.folder_source() {
            self.search_folder(folder, &matcher, &mut outcome).await;
        }

        if let Some(url) = request.url_source() {
            self.search_url(url, &matcher, &mut outcome).await;
        }

        tracing::info!(
            "Search for '{}' found {} matches in {} sources ({} failed)",
            request.pattern,
            outcome.matches.len(),
            outcome.sources_searched,
            outcome.failures.len()
        );

        Ok(outcome)
    }

    async fn search_folder(&self, folder: &Path, matcher: &Matcher, outcome: &mut SearchOutcome) {
        let documents = match list_documents(folder, &self.extension) {
            Ok(documents) => documents,
            Err(e) => {
                record_failure(outcome, SourceRef::Folder(folder.to_path_buf()), e.into());
                return;
            }
        };

        tracing::debug!(
            "Found {} .{} documents in {}",
            documents.len(),
            self.extension,
            folder.display()
        );

        for path in documents {
            // Extraction is blocking file I/O
            let extractor = Arc::clone(&self.documents);
            let target = path.clone();
            let extracted = tokio::task::spawn_blocking(move || extractor.extract(&target))
                .await
                .unwrap_or_else(|e| Err(ExtractError::Io(std::io::Error::other(e))));

            match extracted {
                Ok(text) => {
                    let matches = matcher.find_all(&text);
                    tracing::debug!("{} matches in {}", matches.len(), path.display());
                    outcome.matches.extend(matches);
                    outcome.sources_searched += 1;
                }
                Err(e) => record_failure(outcome, SourceRef::Document(path), e),
            }
        }
    }

    async fn search_url(&self, url: &str, matcher: &Matcher, outcome: &mut SearchOutcome) {
        match self.web.extract(url).await {
            Ok(text) => {
                let matches = matcher.find_all(&text);
                tracing::debug!("{} matches in {}", matches.len(), url);
                outcome.matches.extend(matches);
                outcome.sources_searched += 1;
            }
            Err(e) => record_failure(outcome, SourceRef::Url(url.to_string()), e),
        }
    }
}

fn record_failure(outcome: &mut SearchOutcome, source: SourceRef, cause: ExtractError) {
    let failure = ExtractionFailure::new(source, cause);
    tracing::warn!("{}", failure);
    outcome.failures.push(failure);
}

/// List the documents directly inside `folder` with the given extension.
///
/// Hidden files (leading `.`) are skipped, the extension is compared
/// ASCII case-insensitively, and the directory's own listing order is kept.
pub fn list_documents(folder: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };

        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let matches_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));

        if !hidden && matches_extension && path.is_file() {
            documents.push(path);
        }
    }

    Ok(documents)
}
