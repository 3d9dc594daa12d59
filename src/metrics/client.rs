//! HTTP access to the metrics endpoint.

use async_trait::async_trait;
use thiserror::Error;

use super::snapshot::MetricsSnapshot;

/// Why a refresh cycle failed. Both variants are recoverable: the cycle is
/// logged and dropped, the next tick fetches again.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("metrics request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("metrics payload invalid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce a snapshot. The app holds this as a trait
/// object so refresh cycles can be driven against a test double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch(&self) -> Result<MetricsSnapshot, FetchError>;
}

/// Production source: one GET against the configured URL per cycle.
pub struct HttpMetricsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMetricsSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn fetch(&self) -> Result<MetricsSnapshot, FetchError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failures_carry_the_serde_source() {
        let err: FetchError = serde_json::from_str::<MetricsSnapshot>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().starts_with("metrics payload invalid"));
    }

    #[test]
    fn source_keeps_the_configured_url() {
        let source = HttpMetricsSource::new("http://host:8080/metrics.json");
        assert_eq!(source.url(), "http://host:8080/metrics.json");
    }
}
