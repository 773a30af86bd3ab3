//! Test doubles for the upstream data source.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::{Value, json};

use super::context::ToolContext;
use super::definitions::equity::{CostOfEquitySource, FetchError};
use crate::core::Config;

/// Shared view on how many times a [`FakeSource`] was fetched.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Source that answers every fetch with a canned response.
pub struct FakeSource {
    response: Result<Value, FetchError>,
    calls: CallCounter,
}

impl FakeSource {
    pub fn body(body: Value) -> Self {
        Self {
            response: Ok(body),
            calls: CallCounter::default(),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            response: Err(FetchError::Status(code)),
            calls: CallCounter::default(),
        }
    }

    pub fn timeout(after: Duration) -> Self {
        Self {
            response: Err(FetchError::Timeout(after)),
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait::async_trait]
impl CostOfEquitySource for FakeSource {
    async fn fetch(&self) -> Result<Value, FetchError> {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    fn describe(&self) -> String {
        "fake source".to_string()
    }
}

/// Small dataset shaped like the real endpoint's response.
pub fn sample_dataset() -> Value {
    json!([
        {"isin": "AT0000730007", "date": "2025-01-31", "MV": 5321.4, "ddm_3": 7.12, "rim_3": 8.04, "gewichtet_3": 7.58},
        {"isin": "DE0005140008", "date": "2025-01-31", "MV": 28110.0, "ddm_3": 9.35, "rim_3": 10.21, "gewichtet_3": 9.78},
        {"isin": "CH0012005267", "date": "2025-01-31", "MV": 187602.9, "ddm_3": 6.01, "rim_3": 6.47, "gewichtet_3": 6.24},
        {"isin": "AT0000652011", "date": "2025-01-31", "MV": 15400.2, "ddm_3": 8.66, "rim_3": 9.12, "gewichtet_3": 8.89}
    ])
}

/// Context over default config and the given fake source.
pub fn test_context(source: FakeSource) -> ToolContext {
    ToolContext::with_source(Arc::new(Config::default()), Arc::new(source))
}
