//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default MarktTrendite cost of equity endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.marktrendite.ai/CostofEquity";

/// Default bounded wait for the upstream request.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream MarktTrendite API configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Endpoint reported by the server info resource.
    pub upstream_url: String,

    /// Timeout reported by the server info resource, in seconds.
    pub upstream_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the cost of equity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Full URL of the dataset endpoint.
    pub url: String,

    /// Request timeout in seconds. Always applied.
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        let upstream = UpstreamConfig::default();
        Self {
            upstream_url: upstream.url,
            upstream_timeout_secs: upstream.timeout_secs,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS` (after loading `.env`).
    ///
    /// Needs no logging itself, so it can run before the subscriber exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        if let Ok(v) = std::env::var("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps = !matches!(v.to_lowercase().as_str(), "false" | "0");
        }

        logging
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "marktrendite-api-info".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_LOG_TIMESTAMPS`, transport variables),
    /// the upstream uses `MARKTRENDITE_API_URL` and `MARKTRENDITE_TIMEOUT_SECS`.
    ///
    /// Overrides that are rejected are reported through `tracing`, so the
    /// subscriber should be installed first (see [`LoggingConfig::from_env`]).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MARKTRENDITE_API_URL") {
            info!("Upstream endpoint overridden: {}", url);
            config.upstream.url = url;
        }

        if let Ok(raw) = std::env::var("MARKTRENDITE_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.upstream.timeout_secs = secs,
                _ => warn!(
                    "Ignoring MARKTRENDITE_TIMEOUT_SECS={:?}, keeping {}s",
                    raw, config.upstream.timeout_secs
                ),
            }
        }

        config.resources.upstream_url = config.upstream.url.clone();
        config.resources.upstream_timeout_secs = config.upstream.timeout_secs;

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_upstream() {
        let config = Config::default();
        assert_eq!(config.upstream.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.upstream.timeout(), Duration::from_secs(10));
        assert_eq!(config.server.name, "marktrendite-api-info");
    }

    #[test]
    fn test_upstream_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MARKTRENDITE_API_URL", "http://localhost:9999/coe");
            std::env::set_var("MARKTRENDITE_TIMEOUT_SECS", "3");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.url, "http://localhost:9999/coe");
        assert_eq!(config.upstream.timeout_secs, 3);
        assert_eq!(config.resources.upstream_url, "http://localhost:9999/coe");
        unsafe {
            std::env::remove_var("MARKTRENDITE_API_URL");
            std::env::remove_var("MARKTRENDITE_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_zero_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MARKTRENDITE_TIMEOUT_SECS", "0");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
        unsafe {
            std::env::remove_var("MARKTRENDITE_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_logging_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let logging = LoggingConfig::from_env();
        assert_eq!(logging.level, "debug");
        assert!(!logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rejected_timeout_is_logged() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MARKTRENDITE_TIMEOUT_SECS", "soon");
        }

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let config = tracing::subscriber::with_default(subscriber, Config::from_env);

        assert_eq!(config.upstream.timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("MARKTRENDITE_TIMEOUT_SECS"));
        unsafe {
            std::env::remove_var("MARKTRENDITE_TIMEOUT_SECS");
        }
    }
}
