//! Reqwest-based telemetry source.
//!
//! Fetches a JSON [`StatisticsSnapshot`] from an HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::StatisticsSnapshot;
use crate::traits::SnapshotSource;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Snapshot source that GETs a JSON body from `url`.
///
/// # Example
///
/// ```ignore
/// use blockdash::adapters::HttpSnapshotSource;
/// use blockdash::traits::SnapshotSource;
///
/// let source = HttpSnapshotSource::new("http://localhost:8080/stats");
/// let snapshot = source.fetch_snapshot().await?;
/// println!("gas: {} Gwei", snapshot.gas_price);
/// ```
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpSnapshotSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a preconfigured reqwest client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Convert a reqwest error to a FetchError.
    fn convert_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            FetchError::Transport {
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch_snapshot(&self) -> Result<StatisticsSnapshot, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.convert_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.convert_error(e))?;
        let snapshot: StatisticsSnapshot = serde_json::from_slice(&body)?;
        snapshot
            .validate()
            .map_err(|message| FetchError::InvalidSnapshot { message })?;

        tracing::debug!(url = %self.url, gas_price = snapshot.gas_price, "Fetched snapshot");
        Ok(snapshot)
    }

    fn name(&self) -> &str {
        "http"
    }
}
