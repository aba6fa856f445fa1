/// Pipeline orchestration.
///
/// One scan walks the state machine: validate input, discover candidates,
/// then score candidates in discovery rank order until one crosses the
/// threshold. Selection is first-match-wins: the first candidate (lowest
/// rank) whose score exceeds the threshold is returned, even when a later
/// candidate would score higher. Adapter failures never abort the machine;
/// they degrade to "this candidate contributes nothing" and the scan
/// advances. Every run resolves to exactly one `PipelineOutcome`.
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::discover::{CandidateDiscovery, SearchPageDiscovery};
use crate::error::AppError;
use crate::highlight;
use crate::model::{Document, FetchedContent, MatchResult, PipelineOutcome};
use crate::normalize;
use crate::retrieve::{ContentFetcher, HttpFetcher};
use crate::score;

/// The orchestrator. Stateless across runs; each `scan` call is independent.
///
/// Collaborators are injected, so the scanner is callable identically from a
/// CLI, a service endpoint, or a test harness with stub adapters.
pub struct Scanner {
    config: ScanConfig,
    discovery: Arc<dyn CandidateDiscovery>,
    fetcher: Arc<dyn ContentFetcher>,
}

impl Scanner {
    pub fn new(
        config: ScanConfig,
        discovery: Arc<dyn CandidateDiscovery>,
        fetcher: Arc<dyn ContentFetcher>,
    ) -> Self {
        Self {
            config,
            discovery,
            fetcher,
        }
    }

    /// Build a scanner with the reference HTTP adapters.
    pub fn with_reference_adapters(config: ScanConfig) -> Result<Self, AppError> {
        let discovery = Arc::new(SearchPageDiscovery::new(&config)?);
        let fetcher = Arc::new(HttpFetcher::new(&config)?);
        Ok(Self::new(config, discovery, fetcher))
    }

    /// Build a scanner from environment configuration and the reference
    /// adapters.
    pub fn from_env() -> Result<Self, AppError> {
        Self::with_reference_adapters(ScanConfig::from_env()?)
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the full pipeline on one document.
    pub async fn scan(&self, text: &str) -> PipelineOutcome {
        let document = Document::new(text);
        if document.is_blank() {
            debug!("document is empty or whitespace-only");
            return PipelineOutcome::InputEmpty;
        }

        let query = document.query_fragment(self.config.query_fragment_chars);
        let candidates = self.discovery.discover(&query).await;
        if candidates.is_empty() {
            info!("no candidates discovered");
            return PipelineOutcome::NoCandidatesFound;
        }
        info!(count = candidates.len(), "scanning candidates in rank order");

        for candidate in candidates {
            let content = FetchedContent {
                text: self.fetcher.fetch(&candidate.url).await,
                source: candidate,
            };
            if content.is_empty() {
                debug!(url = %content.source.url, "empty content, skipping");
                continue;
            }
            if normalize::tokenize(&content.text).next().is_none() {
                debug!(url = %content.source.url, "no tokens after normalization, skipping");
                continue;
            }

            let score = score::similarity(&document.raw_text, &content.text);
            debug!(url = %content.source.url, rank = content.source.rank, score, "scored candidate");
            if score > self.config.similarity_threshold {
                info!(
                    url = %content.source.url,
                    rank = content.source.rank,
                    score,
                    "match found"
                );
                let annotated_text = highlight::annotate(&document.raw_text, &content.text);
                return PipelineOutcome::Match(MatchResult {
                    candidate_url: content.source.url,
                    score,
                    annotated_text,
                });
            }
        }

        info!("all candidates below threshold");
        PipelineOutcome::NoSignificantMatch
    }
}
