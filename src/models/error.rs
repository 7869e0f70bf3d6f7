/// Failures surfaced by the trends API client
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never produced a response (offline, CORS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with an error status
    #[error("API error: {0}")]
    ApiError(String),

    /// The response body did not match the expected records
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Whether retrying the same request later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::RateLimited)
    }
}
