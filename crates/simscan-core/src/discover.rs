/// Candidate discovery.
///
/// Given a query fragment, produce a ranked list of candidate source URLs to
/// check. The trait surface is infallible: an unreachable backend or an error
/// status degrades to an empty list with a warning log, and the orchestrator
/// turns an empty list into the `NoCandidatesFound` outcome. Ordering is
/// whatever the backend returns, treated as rank order.
use std::collections::HashSet;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::AppError;
use crate::model::Candidate;

/// Any search or indexing backend that maps a query to ranked URLs.
#[async_trait]
pub trait CandidateDiscovery: Send + Sync {
    async fn discover(&self, query: &str) -> Vec<Candidate>;
}

/// Reference discovery backend: scrapes result links from an HTML search page.
///
/// The page is fetched with a browser-like user agent, result anchors are
/// collected in page order, redirect-wrapped links (`/url?q=…`) are unwrapped,
/// and the first `max_candidates` distinct absolute http(s) URLs become the
/// candidates.
pub struct SearchPageDiscovery {
    http: reqwest::Client,
    search_url: String,
    max_candidates: usize,
}

impl SearchPageDiscovery {
    pub fn new(config: &ScanConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.fetch_timeout)
            .build()?;
        Ok(Self {
            http,
            search_url: config.search_url.clone(),
            max_candidates: config.max_candidates,
        })
    }

    async fn try_discover(&self, query: &str) -> Result<Vec<Candidate>, AppError> {
        let url = format!("{}?q={}", self.search_url, urlencoding::encode(query));
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        Ok(extract_result_links(&body, self.max_candidates))
    }
}

#[async_trait]
impl CandidateDiscovery for SearchPageDiscovery {
    async fn discover(&self, query: &str) -> Vec<Candidate> {
        match self.try_discover(query).await {
            Ok(candidates) => {
                debug!(count = candidates.len(), "discovery returned candidates");
                candidates
            }
            Err(e) => {
                warn!(error = %e, "discovery failed, returning no candidates");
                Vec::new()
            }
        }
    }
}

/// Harvest candidate URLs from a search result page, in page order.
///
/// Keeps absolute http(s) links, unwraps `/url?q=…&…` redirect anchors,
/// drops duplicates while preserving first-seen order, and caps the list at
/// `max_candidates`. Rank is the 0-based position in the surviving list.
fn extract_result_links(html: &str, max_candidates: usize) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let anchor = Selector::parse("a[href]").expect("valid selector");

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();
    for element in document.select(&anchor) {
        if candidates.len() >= max_candidates {
            break;
        }
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = unwrap_result_link(href) else {
            continue;
        };
        if !seen.insert(url.to_string()) {
            continue;
        }
        candidates.push(Candidate {
            url: url.to_string(),
            rank: candidates.len(),
        });
    }
    candidates
}

/// Unwrap a result anchor href into an absolute URL, or `None` for
/// navigation/relative links. Redirect anchors carry the target in a `q`
/// parameter followed by tracking parameters.
fn unwrap_result_link(href: &str) -> Option<&str> {
    let target = match href.strip_prefix("/url?q=") {
        Some(wrapped) => wrapped.split('&').next().unwrap_or(wrapped),
        None => href,
    };
    if target.starts_with("http://") || target.starts_with("https://") {
        Some(target)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_redirect_anchors_and_drops_tracking_params() {
        assert_eq!(
            unwrap_result_link("/url?q=https://example.com/page&sa=U&ved=xyz"),
            Some("https://example.com/page")
        );
    }

    #[test]
    fn keeps_plain_absolute_links() {
        assert_eq!(
            unwrap_result_link("https://example.com/a"),
            Some("https://example.com/a")
        );
        assert_eq!(
            unwrap_result_link("http://example.com/b"),
            Some("http://example.com/b")
        );
    }

    #[test]
    fn rejects_relative_and_fragment_links() {
        assert_eq!(unwrap_result_link("/settings"), None);
        assert_eq!(unwrap_result_link("#top"), None);
        assert_eq!(unwrap_result_link("mailto:x@example.com"), None);
    }

    #[test]
    fn extracts_in_page_order_with_ranks() {
        let html = r#"<html><body>
            <a href="/nav">nav</a>
            <a href="/url?q=https://first.example/&sa=U">r1</a>
            <a href="https://second.example/page">r2</a>
            <a href="https://first.example/">dup of r1</a>
            <a href="https://third.example/">r3</a>
        </body></html>"#;
        let candidates = extract_result_links(html, 5);
        let urls: Vec<&str> = candidates.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://first.example/",
                "https://second.example/page",
                "https://third.example/",
            ]
        );
        let ranks: Vec<usize> = candidates.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn caps_the_candidate_list() {
        let html: String = (0..10)
            .map(|i| format!(r#"<a href="https://site{i}.example/">x</a>"#))
            .collect();
        let candidates = extract_result_links(&html, 5);
        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[4].url, "https://site4.example/");
    }
}
