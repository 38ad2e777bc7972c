//! Integration tests for wordfinder
//!
//! These tests drive the public API end to end: real `.docx` files on disk,
//! a mock HTTP server for the web page, and the export sink.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use wordfinder::config::Settings;
use wordfinder::extract::{DocxExtractor, MockDocumentExtractor, MockWebExtractor};
use wordfinder::models::SourceRef;
use wordfinder::search::SearchAggregator;
use wordfinder::utils::{export_match, ValidationError};
use wordfinder::{SearchError, SearchRequest};

/// Write a minimal `.docx` with one paragraph per entry
fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );
    write_docx_xml(path, &xml);
}

/// Write a `.docx` whose `word/document.xml` is exactly `xml`
fn write_docx_xml(path: &Path, xml: &str) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

fn docx_aggregator() -> SearchAggregator {
    SearchAggregator::from_settings(&Settings::default()).unwrap()
}

#[tokio::test]
async fn test_folder_search_with_real_documents() {
    let dir = tempfile::tempdir().unwrap();
    write_docx(
        &dir.path().join("letter.docx"),
        &["The Quick brown fox", "jumps over the quick dog"],
    );
    write_docx(&dir.path().join("notes.docx"), &["nothing to see here"]);
    std::fs::write(dir.path().join("readme.txt"), "quick quick quick").unwrap();

    let request = SearchRequest::new("quick").folder(dir.path());
    let outcome = docx_aggregator().run_search(&request).await.unwrap();

    assert_eq!(outcome.matches, vec!["Quick", "quick"]);
    assert_eq!(outcome.sources_searched, 2);
    assert!(!outcome.has_failures());
}

#[tokio::test]
async fn test_phrase_spanning_runs_in_one_paragraph() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("split.docx");
    let xml = r#"<?xml version="1.0"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>brown </w:t></w:r><w:r><w:t>fox</w:t></w:r></w:p></w:body></w:document>"#;
    write_docx_xml(&path, xml);

    let request = SearchRequest::new("brown fox").folder(dir.path());
    let outcome = docx_aggregator().run_search(&request).await.unwrap();
    assert_eq!(outcome.matches, vec!["brown fox"]);
}

#[tokio::test]
async fn test_text_box_matches_are_not_reported() {
    let dir = tempfile::tempdir().unwrap();
    let text_box = "<w:txbxContent><w:p><w:r><w:t>fox in a box</w:t></w:r></w:p></w:txbxContent>";
    let xml = format!(
        "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\" \
         xmlns:mc=\"http://schemas.openxmlformats.org/markup-compatibility/2006\"><w:body>\
         <w:p><w:r><w:t>A fox</w:t></w:r><w:r><mc:AlternateContent>\
         <mc:Choice Requires=\"wps\"><w:drawing>{0}</w:drawing></mc:Choice>\
         <mc:Fallback><w:pict>{0}</w:pict></mc:Fallback>\
         </mc:AlternateContent></w:r></w:p></w:body></w:document>",
        text_box
    );
    write_docx_xml(&dir.path().join("boxed.docx"), &xml);

    let request = SearchRequest::new("fox").folder(dir.path());
    let outcome = docx_aggregator().run_search(&request).await.unwrap();
    assert_eq!(outcome.matches, vec!["fox"]);
}

#[tokio::test]
async fn test_deserialized_request_with_blank_sources_is_rejected() {
    let documents = Arc::new(MockDocumentExtractor::new());
    let web = Arc::new(MockWebExtractor::new());
    let aggregator = SearchAggregator::new(documents.clone(), web.clone());

    let request: SearchRequest =
        serde_json::from_str(r#"{"pattern":"fox","folder":" ","url":""}"#).unwrap();
    assert!(matches!(
        aggregator.run_search(&request).await,
        Err(SearchError::Validation(ValidationError::NoSource))
    ));
    assert!(documents.calls().is_empty());
    assert!(web.calls().is_empty());
}

#[tokio::test]
async fn test_corrupt_document_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_docx(&dir.path().join("good.docx"), &["a fox"]);
    std::fs::write(dir.path().join("broken.docx"), b"not a zip archive").unwrap();

    let request = SearchRequest::new("fox").folder(dir.path());
    let outcome = docx_aggregator().run_search(&request).await.unwrap();

    assert_eq!(outcome.matches, vec!["fox"]);
    assert_eq!(outcome.sources_searched, 1);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(
        outcome.failures[0].source,
        SourceRef::Document(dir.path().join("broken.docx"))
    );
}

#[tokio::test]
async fn test_web_page_search_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/page")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            "<html><head><style>.quick{}</style><script>var quick = 1;</script></head>\
             <body><p>A <b>Quick</b> test.</p><p>Still quick.</p></body></html>",
        )
        .create_async()
        .await;

    let request = SearchRequest::new("quick").url(format!("{}/page", server.url()));
    let outcome = docx_aggregator().run_search(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome.matches, vec!["Quick", "quick"]);
    assert_eq!(outcome.sources_searched, 1);
}

#[tokio::test]
async fn test_web_page_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/missing", server.url());
    let request = SearchRequest::new("quick").url(url.clone());
    let outcome = docx_aggregator().run_search(&request).await.unwrap();

    assert!(outcome.is_empty());
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].source, SourceRef::Url(url));
    assert!(outcome.failures[0].to_string().contains("404"));
}

#[tokio::test]
async fn test_document_matches_precede_web_matches() {
    let documents = Arc::new(MockDocumentExtractor::new());
    documents.set_text("a.docx", "fox one");
    let web = Arc::new(MockWebExtractor::new());
    web.set_text("FOX from the web");

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.docx"), b"").unwrap();

    let aggregator = SearchAggregator::new(documents.clone(), web.clone());
    let request = SearchRequest::new("fox")
        .folder(dir.path())
        .url("https://example.com");
    let outcome = aggregator.run_search(&request).await.unwrap();

    assert_eq!(outcome.matches, vec!["fox", "FOX"]);
    assert_eq!(documents.calls().len(), 1);
    assert_eq!(web.calls(), vec!["https://example.com".to_string()]);
}

#[tokio::test]
async fn test_missing_folder_still_searches_url() {
    let documents = Arc::new(MockDocumentExtractor::new());
    let web = Arc::new(MockWebExtractor::new());
    web.set_text("the fox");

    let aggregator = SearchAggregator::new(documents, web);
    let request = SearchRequest::new("fox")
        .folder("/nonexistent/wordfinder/folder")
        .url("https://example.com");
    let outcome = aggregator.run_search(&request).await.unwrap();

    assert_eq!(outcome.matches, vec!["fox"]);
    assert!(matches!(outcome.failures[0].source, SourceRef::Folder(_)));
}

#[tokio::test]
async fn test_validation_happens_before_any_io() {
    let documents = Arc::new(MockDocumentExtractor::new());
    let web = Arc::new(MockWebExtractor::new());
    let aggregator = SearchAggregator::new(documents.clone(), web.clone());

    let empty = SearchRequest::new("").url("https://example.com");
    assert!(matches!(
        aggregator.run_search(&empty).await,
        Err(SearchError::Validation(ValidationError::EmptyPattern))
    ));

    let no_source = SearchRequest::new("fox");
    assert!(matches!(
        aggregator.run_search(&no_source).await,
        Err(SearchError::Validation(ValidationError::NoSource))
    ));

    let invalid = SearchRequest::new("(unclosed").url("https://example.com");
    assert!(matches!(
        aggregator.run_search(&invalid).await,
        Err(SearchError::Pattern(_))
    ));

    assert!(web.calls().is_empty());
    assert!(documents.calls().is_empty());
}

#[tokio::test]
async fn test_search_then_export_selected_match() {
    let dir = tempfile::tempdir().unwrap();
    write_docx(&dir.path().join("letter.docx"), &["Dear Ms. Smith, regards"]);

    let request = SearchRequest::new(r"ms\.\s+\w+").folder(dir.path());
    let outcome = docx_aggregator().run_search(&request).await.unwrap();
    let selected = outcome.selected(1).unwrap();
    assert_eq!(selected, "Ms. Smith");

    let out = dir.path().join("export.txt");
    export_match(&out, selected).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "Ms. Smith");
}

#[test]
fn test_docx_extractor_is_public() {
    let extractor = DocxExtractor::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.docx");
    write_docx(&path, &["first", "", "third"]);

    use wordfinder::extract::DocumentExtractor;
    assert_eq!(extractor.extract(&path).unwrap(), "first\n\nthird");
}
