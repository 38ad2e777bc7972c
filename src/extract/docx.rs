//! `.docx` text extraction.
//!
//! A `.docx` file is a ZIP container whose main body lives in
//! `word/document.xml`. Only body-level paragraphs (`w:p` directly under
//! `w:body`) are collected, in document order; paragraphs nested in tables
//! and text boxes are not.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{DocumentExtractor, ExtractError};

/// Archive member holding the document body
const DOCUMENT_PART: &str = "word/document.xml";

/// Run content that is drawn rather than flowed with the paragraph.
///
/// Text boxes live here, and Word stores each one twice (`mc:Choice` and
/// `mc:Fallback`), so none of it belongs to the paragraph's text.
const EMBEDDED_CONTENT: &[&[u8]] = &[
    b"AlternateContent",
    b"drawing",
    b"pict",
    b"object",
    b"txbxContent",
];

/// Extracts paragraph text from Office Open XML word-processing documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;
        let part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => {
                ExtractError::Archive(format!("missing {}", DOCUMENT_PART))
            }
            other => other.into(),
        })?;

        let text = document_text(BufReader::new(part))?;
        tracing::debug!("Extracted {} bytes of text from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Collect the paragraph text of a `word/document.xml` stream.
///
/// Runs are concatenated, `w:tab` becomes `\t`, `w:cr` and line breaks
/// become `\n`, page and column breaks are dropped, and paragraphs are
/// joined with a single `\n`. Drawings and text boxes are skipped.
pub(crate) fn document_text<R: BufRead>(input: R) -> Result<String, ExtractError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    let mut depth = 0usize;
    let mut body_child_depth: Option<usize> = None;
    let mut paragraph_depth = 0usize;
    let mut in_text = false;
    // Tab stops inside paragraph properties are definitions, not content
    let mut in_properties = 0usize;
    // Depth of the embedded-content element being skipped
    let mut skip_depth: Option<usize> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(_) if skip_depth.is_some() => depth += 1,
            Event::End(_) if skip_depth.is_some() => {
                depth = depth.saturating_sub(1);
                if skip_depth == Some(depth) {
                    skip_depth = None;
                }
            }
            _ if skip_depth.is_some() => {}
            Event::Start(e) => {
                match e.local_name().as_ref() {
                    b"body" => body_child_depth = Some(depth + 1),
                    b"p" if current.is_none() && body_child_depth == Some(depth) => {
                        current = Some(String::new());
                        paragraph_depth = depth;
                    }
                    name if current.is_some() && EMBEDDED_CONTENT.iter().any(|c| *c == name) => {
                        skip_depth = Some(depth);
                    }
                    b"t" if current.is_some() => in_text = true,
                    b"pPr" => in_properties += 1,
                    _ => {}
                }
                depth += 1;
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"pPr" => in_properties = in_properties.saturating_sub(1),
                    b"p" if depth == paragraph_depth => {
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                    b"body" => body_child_depth = None,
                    _ => {}
                }
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if current.is_none() && body_child_depth == Some(depth) => {
                    paragraphs.push(String::new());
                }
                b"tab" if in_properties == 0 => {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push('\t');
                    }
                }
                b"br" if is_line_break(&e) => {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push('\n');
                    }
                }
                b"cr" => {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&t.unescape()?);
                }
            }
            Event::CData(t) if in_text => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&String::from_utf8_lossy(&t));
                }
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

/// `w:br` without a type, or `w:type="textWrapping"`, is a line break.
fn is_line_break(element: &BytesStart<'_>) -> bool {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"type")
        .map_or(true, |attr| attr.value.as_ref() == b"textWrapping")
}

/// Write a minimal `.docx` holding one `w:p` per entry of `paragraphs`.
#[cfg(test)]
pub(crate) fn write_test_docx(path: &Path, paragraphs: &[&str]) {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}
