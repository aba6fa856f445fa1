/// Content retrieval.
///
/// Fetches a candidate URL and renders the page as plain text with markup
/// and script/style content stripped. Any non-success transport outcome
/// collapses to an empty string, never an error, so one bad candidate cannot
/// abort the scan of the remaining ones.
use async_trait::async_trait;
use scraper::{Html, Node};
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::AppError;

/// Maps a URL to a plain-text rendering of the page, or `""` on any failure.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> String;
}

/// Reference fetcher: HTTP GET with a per-request timeout, then visible-text
/// extraction from the response body.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScanConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.fetch_timeout)
            .build()?;
        Ok(Self { http })
    }

    async fn try_fetch(&self, url: &str) -> Result<String, AppError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        Ok(visible_text(&body))
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(text) => {
                debug!(url, chars = text.len(), "fetched candidate content");
                text
            }
            Err(e) => {
                warn!(url, error = %e, "fetch failed, treating candidate as empty");
                String::new()
            }
        }
    }
}

/// Extract the human-visible text of an HTML document: every text node whose
/// ancestor chain contains no `script`, `style`, or `noscript` element,
/// joined and whitespace-normalized. Non-HTML bodies pass through as their
/// own text content.
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();
    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(element) => {
                matches!(element.name(), "script" | "style" | "noscript")
            }
            _ => false,
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }
    let joined = parts.join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_and_drops_tags() {
        let html = "<html><body><h1>Hello</h1><p>world again</p></body></html>";
        assert_eq!(visible_text(html), "Hello world again");
    }

    #[test]
    fn strips_script_style_and_noscript_content() {
        let html = r#"<html><head>
            <style>body { color: red; }</style>
            <script>var hidden = "secret";</script>
        </head><body>
            <noscript>enable javascript</noscript>
            <p>visible words</p>
        </body></html>"#;
        assert_eq!(visible_text(html), "visible words");
    }

    #[test]
    fn normalizes_whitespace_runs() {
        let html = "<p>one\n\n   two</p><p>three</p>";
        assert_eq!(visible_text(html), "one two three");
    }

    #[test]
    fn plain_text_body_passes_through() {
        assert_eq!(visible_text("just words, no markup"), "just words, no markup");
    }

    #[test]
    fn empty_body_yields_empty_text() {
        assert_eq!(visible_text(""), "");
    }
}
