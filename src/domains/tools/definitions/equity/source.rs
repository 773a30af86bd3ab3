//! Upstream access to the CostofEquity endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::config::UpstreamConfig;
use crate::core::Result;

/// Failures while retrieving the dataset. All of them are rendered as text
/// by the tools, none reaches the protocol layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered with a status other than 200.
    #[error("API request failed with status: {0}")]
    Status(u16),

    /// No complete response within the configured bound.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// DNS or TCP/TLS connection failure.
    #[error("could not connect to the API: {0}")]
    Connect(String),

    /// The body was not valid JSON.
    #[error("could not decode the API response: {0}")]
    Decode(String),

    /// Any other request failure.
    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Short failure category used in result texts and logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Status(_) => "http status",
            Self::Timeout(_) => "timeout",
            Self::Connect(_) => "connection",
            Self::Decode(_) => "decode",
            Self::Request(_) => "network",
        }
    }
}

/// Something that can produce the raw dataset body.
#[async_trait::async_trait]
pub trait CostOfEquitySource: Send + Sync {
    /// Issue exactly one request and return the decoded JSON body.
    async fn fetch(&self) -> std::result::Result<Value, FetchError>;

    /// Where the data comes from, for logging.
    fn describe(&self) -> String;
}

/// [`CostOfEquitySource`] backed by an HTTP GET with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpCostOfEquitySource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpCostOfEquitySource {
    /// Build the HTTP client for the configured endpoint.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Use a preconfigured client. Its timeout should match `config.timeout_secs`.
    pub fn with_client(client: reqwest::Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            url: config.url.clone(),
            timeout: config.timeout(),
        }
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if err.is_connect() {
            FetchError::Connect(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl CostOfEquitySource for HttpCostOfEquitySource {
    async fn fetch(&self) -> std::result::Result<Value, FetchError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| self.classify(e))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
