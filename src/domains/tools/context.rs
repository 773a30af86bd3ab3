//! Shared, immutable context handed to every tool invocation.

use std::sync::Arc;

use crate::core::{Config, Result};

use super::definitions::equity::{CostOfEquitySource, HttpCostOfEquitySource};

/// Process-wide state the tools may read.
///
/// Built once at startup and shared through an `Arc`; nothing in it is mutated
/// after construction, so concurrent invocations need no locking.
pub struct ToolContext {
    config: Arc<Config>,
    source: Arc<dyn CostOfEquitySource>,
}

impl ToolContext {
    /// Create a context backed by the real MarktTrendite endpoint.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let source = HttpCostOfEquitySource::new(&config.upstream)?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Create a context with an explicit data source.
    pub fn with_source(config: Arc<Config>, source: Arc<dyn CostOfEquitySource>) -> Self {
        Self { config, source }
    }

    /// Server configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Upstream cost of equity data source.
    pub fn source(&self) -> &dyn CostOfEquitySource {
        self.source.as_ref()
    }
}
