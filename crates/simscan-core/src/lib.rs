pub mod config;
pub mod discover;
pub mod error;
pub mod highlight;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod retrieve;
pub mod score;

pub use config::ScanConfig;
pub use discover::{CandidateDiscovery, SearchPageDiscovery};
pub use error::AppError;
pub use model::{Candidate, Document, FetchedContent, MatchResult, PipelineOutcome};
pub use pipeline::Scanner;
pub use retrieve::{ContentFetcher, HttpFetcher};
