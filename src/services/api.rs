use crate::config::Config;
use crate::models::{
    error::AppError,
    history::{HistoryPoint, HistorySeries, HistorySource},
    keyword::{KeywordDomain, KeywordOption},
    occurrences::{OccurrenceRecord, OccurrenceSeries},
    sample::SampleRow,
    selection::DrillDownTarget,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Characters `encodeURIComponent` leaves alone
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Encodes each keyword separately and joins them with a literal comma
pub fn encode_keyword_list(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| encode_component(k))
        .collect::<Vec<_>>()
        .join(",")
}

// API CONFIGURATION
/// Endpoint layout of the trends API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn submission_history_url(&self) -> String {
        format!("{}/submissions/history", self.base_url)
    }

    pub fn hiring_history_url(&self, toplevel_only: bool) -> String {
        format!(
            "{}/hiring/history?toplevel_only={toplevel_only}",
            self.base_url
        )
    }

    pub fn history_url(&self, source: HistorySource) -> String {
        match source {
            HistorySource::Submissions => self.submission_history_url(),
            HistorySource::Hiring { toplevel_only } => self.hiring_history_url(toplevel_only),
        }
    }

    pub fn occurrences_url(&self, domain: KeywordDomain, keywords: &[String]) -> String {
        format!(
            "{}{}?keywords={}",
            self.base_url,
            domain.occurrences_path(),
            encode_keyword_list(keywords)
        )
    }

    pub fn samples_url(&self, target: &DrillDownTarget) -> String {
        format!(
            "{}/submissions/samples?keyword={}&year_month={}",
            self.base_url,
            encode_component(&target.keyword),
            encode_component(&target.year_month)
        )
    }

    pub fn keywords_url(&self, domain: KeywordDomain) -> String {
        format!("{}/keywords?hiring={}", self.base_url, domain.is_hiring())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL. A trailing slash is ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_URL.to_string());
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct ApiSubmissionCount {
    submission_date: String,
    moving_avg: f64,
}

impl From<ApiSubmissionCount> for HistoryPoint {
    fn from(p: ApiSubmissionCount) -> Self {
        Self {
            period: p.submission_date,
            value: p.moving_avg,
        }
    }
}

#[derive(Deserialize, Debug)]
struct ApiCommentCount {
    year_month: String,
    num_comments: f64,
}

impl From<ApiCommentCount> for HistoryPoint {
    fn from(p: ApiCommentCount) -> Self {
        Self {
            period: p.year_month,
            value: p.num_comments,
        }
    }
}

// TRENDS CLIENT
/// HTTP client for the trends API.
pub struct TrendsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl TrendsClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the aggregate history for `source`.
    pub async fn fetch_history(&self, source: HistorySource) -> Result<HistorySeries, AppError> {
        let url = self.config.history_url(source);

        let points: Vec<HistoryPoint> = match source {
            HistorySource::Submissions => self
                .fetch::<ApiSubmissionCount>(&url)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
            HistorySource::Hiring { .. } => self
                .fetch::<ApiCommentCount>(&url)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        };
        Ok(HistorySeries::new(points))
    }

    /// Fetches monthly counts for exactly `keywords`. An empty set yields an empty series without a request.
    pub async fn fetch_occurrences(
        &self,
        domain: KeywordDomain,
        keywords: &[String],
    ) -> Result<OccurrenceSeries, AppError> {
        if keywords.is_empty() {
            return Ok(OccurrenceSeries::default());
        }

        let url = self.config.occurrences_url(domain, keywords);
        let records: Vec<OccurrenceRecord> = self.fetch(&url).await?;
        Ok(OccurrenceSeries::new(records))
    }

    /// Fetches the sample submissions for a drill-down target.
    pub async fn fetch_samples(&self, target: &DrillDownTarget) -> Result<Vec<SampleRow>, AppError> {
        let url = self.config.samples_url(target);
        self.fetch(&url).await
    }

    /// Fetches the selectable keywords for `domain`.
    pub async fn fetch_keywords(
        &self,
        domain: KeywordDomain,
    ) -> Result<Vec<KeywordOption>, AppError> {
        let url = self.config.keywords_url(domain);
        self.fetch(&url).await
    }

    /// Executes a single GET and decodes a JSON array of records.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response from {url}: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("request timed out: {error}"))
        } else if error.is_builder() {
            AppError::ConfigError(format!("invalid request: {error}"))
        } else {
            AppError::Network(error.to_string())
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches an aggregate history using default configuration.
pub async fn fetch_history(source: HistorySource) -> Result<HistorySeries, AppError> {
    TrendsClient::new()?.fetch_history(source).await
}

/// Fetches a keyword occurrence series using default configuration.
pub async fn fetch_occurrences(
    domain: KeywordDomain,
    keywords: Vec<String>,
) -> Result<OccurrenceSeries, AppError> {
    TrendsClient::new()?
        .fetch_occurrences(domain, &keywords)
        .await
}

/// Fetches drill-down samples using default configuration.
pub async fn fetch_samples(target: DrillDownTarget) -> Result<Vec<SampleRow>, AppError> {
    TrendsClient::new()?.fetch_samples(&target).await
}

/// Fetches the keyword options using default configuration.
pub async fn fetch_keywords(domain: KeywordDomain) -> Result<Vec<KeywordOption>, AppError> {
    TrendsClient::new()?.fetch_keywords(domain).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::builder()
            .base_url("https://api.example.com/")
            .build()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(config().base_url(), "https://api.example.com");
    }

    #[test]
    fn test_default_base_url_from_config() {
        assert_eq!(
            ApiConfig::default().base_url(),
            Config::API_URL.trim_end_matches('/')
        );
    }

    #[test]
    fn test_occurrences_url_joins_keywords() {
        let keywords = vec!["rust".to_string(), "golang".to_string()];
        assert_eq!(
            config().occurrences_url(KeywordDomain::Submissions, &keywords),
            "https://api.example.com/submissions/occurrences?keywords=rust,golang"
        );
        assert_eq!(
            config().occurrences_url(KeywordDomain::Hiring, &keywords),
            "https://api.example.com/hiring/occurrences?keywords=rust,golang"
        );
    }

    #[test]
    fn test_keywords_are_encoded_individually() {
        let keywords = vec!["c++".to_string(), "c#".to_string(), "a,b".to_string()];
        assert_eq!(encode_keyword_list(&keywords), "c%2B%2B,c%23,a%2Cb");
        assert_eq!(encode_component("node.js (v8)"), "node.js%20(v8)");
    }

    #[test]
    fn test_samples_url() {
        let target = DrillDownTarget::new("rust", "2024-01");
        assert_eq!(
            config().samples_url(&target),
            "https://api.example.com/submissions/samples?keyword=rust&year_month=2024-01"
        );
    }

    #[test]
    fn test_keywords_url() {
        assert_eq!(
            config().keywords_url(KeywordDomain::Submissions),
            "https://api.example.com/keywords?hiring=false"
        );
        assert_eq!(
            config().keywords_url(KeywordDomain::Hiring),
            "https://api.example.com/keywords?hiring=true"
        );
    }

    #[test]
    fn test_history_urls() {
        assert_eq!(
            config().history_url(HistorySource::Submissions),
            "https://api.example.com/submissions/history"
        );
        assert_eq!(
            config().history_url(HistorySource::Hiring {
                toplevel_only: true
            }),
            "https://api.example.com/hiring/history?toplevel_only=true"
        );
    }

    #[test]
    fn test_history_response_parsing() {
        let json = r#"[
            {"submission_date": "2024-01-01", "moving_avg": 1234.5},
            {"submission_date": "2024-01-02", "moving_avg": 1240}
        ]"#;
        let raw: Vec<ApiSubmissionCount> = serde_json::from_str(json).unwrap();
        let series = HistorySeries::new(raw.into_iter().map(Into::into).collect());
        let (x, y) = series.series_data();
        assert_eq!(x, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(y, vec![1234.5, 1240.0]);

        let json = r#"[{"year_month": "2024-01", "num_comments": 512}]"#;
        let raw: Vec<ApiCommentCount> = serde_json::from_str(json).unwrap();
        let point: HistoryPoint = raw.into_iter().next().unwrap().into();
        assert_eq!(point.period, "2024-01");
        assert_eq!(point.value, 512.0);
    }

    #[test]
    fn test_client_creation() {
        let client = TrendsClient::with_config(config());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().config, config());
    }
}
