#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("config error: {0}")]
    Config(String),
}
