use std::time::Duration;

use crate::error::AppError;

/// Scan configuration loaded explicitly from environment variables.
///
/// Every field has a documented default, so `ScanConfig::default()` is the
/// reference behavior and `from_env` only overrides what the environment sets.
/// Threshold and candidate cap are configuration on purpose: tests and tuning
/// vary them without touching pipeline logic.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// A candidate matches when its similarity score is strictly above this.
    pub similarity_threshold: f64,
    /// Maximum number of candidate URLs taken from discovery.
    pub max_candidates: usize,
    /// Number of characters of the trimmed document used as the search query.
    pub query_fragment_chars: usize,
    /// Base URL of the search page queried for candidates.
    pub search_url: String,
    /// Per-request timeout for discovery and retrieval fetches.
    pub fetch_timeout: Duration,
    /// User-agent header sent on outbound requests.
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.2,
            max_candidates: 5,
            query_fragment_chars: 200,
            search_url: "https://www.google.com/search".to_string(),
            fetch_timeout: Duration::from_secs(10),
            user_agent: "Mozilla/5.0 (compatible; simscan)".to_string(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `SIMSCAN_THRESHOLD`: similarity threshold in [0, 1] (default 0.2)
    /// - `SIMSCAN_MAX_CANDIDATES`: candidate cap (default 5)
    /// - `SIMSCAN_QUERY_CHARS`: query fragment length (default 200)
    /// - `SIMSCAN_SEARCH_URL`: search page base URL
    /// - `SIMSCAN_FETCH_TIMEOUT_SECS`: per-fetch timeout (default 10)
    /// - `SIMSCAN_USER_AGENT`: outbound user agent
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("SIMSCAN_THRESHOLD") {
            let value: f64 = raw.parse().map_err(|_| {
                AppError::Config(format!("SIMSCAN_THRESHOLD is not a number: {raw}"))
            })?;
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::Config(format!(
                    "SIMSCAN_THRESHOLD must be in [0, 1], got {value}"
                )));
            }
            config.similarity_threshold = value;
        }

        if let Ok(raw) = std::env::var("SIMSCAN_MAX_CANDIDATES") {
            config.max_candidates = raw.parse().map_err(|_| {
                AppError::Config(format!("SIMSCAN_MAX_CANDIDATES is not an integer: {raw}"))
            })?;
        }

        if let Ok(raw) = std::env::var("SIMSCAN_QUERY_CHARS") {
            config.query_fragment_chars = raw.parse().map_err(|_| {
                AppError::Config(format!("SIMSCAN_QUERY_CHARS is not an integer: {raw}"))
            })?;
        }

        if let Ok(url) = std::env::var("SIMSCAN_SEARCH_URL") {
            config.search_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("SIMSCAN_FETCH_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                AppError::Config(format!(
                    "SIMSCAN_FETCH_TIMEOUT_SECS is not an integer: {raw}"
                ))
            })?;
            config.fetch_timeout = Duration::from_secs(secs);
        }

        if let Ok(agent) = std::env::var("SIMSCAN_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = ScanConfig::default();
        assert_eq!(config.similarity_threshold, 0.2);
        assert_eq!(config.max_candidates, 5);
        assert_eq!(config.query_fragment_chars, 200);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }
}
