//! Web page text extraction.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Node};
use std::sync::Arc;

use super::{ExtractError, WebExtractor};
use crate::utils::HttpClient;

/// Elements whose text is never rendered
pub const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Fetches a page with a single GET and returns its text content.
///
/// No retries. The timeout is whatever the [`HttpClient`] was built with.
#[derive(Debug, Clone)]
pub struct WebPageExtractor {
    client: Arc<HttpClient>,
    skip_hidden: bool,
}

impl WebPageExtractor {
    /// Create an extractor that drops script and style text
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            skip_hidden: true,
        }
    }

    /// Keep or drop the text of [`HIDDEN_ELEMENTS`]
    pub fn skip_hidden_elements(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }
}

#[async_trait]
impl WebExtractor for WebPageExtractor {
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        let response = self
            .client
            .client()
            .get(url)
            .header("Accept", "text/html")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ExtractError::Parse(format!("Failed to read HTML: {}", e)))?;

        let text = html_to_text(&html, self.skip_hidden);
        tracing::debug!("Extracted {} bytes of text from {}", text.len(), url);
        Ok(text)
    }
}

/// Strip all markup from an HTML document, keeping text nodes in order.
///
/// With `skip_hidden`, the contents of [`HIDDEN_ELEMENTS`] are dropped.
pub fn html_to_text(html: &str, skip_hidden: bool) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    collect_text(document.root_element(), skip_hidden, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, skip_hidden: bool, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if skip_hidden && HIDDEN_ELEMENTS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, skip_hidden, out);
                }
            }
            _ => {}
        }
    }
}
