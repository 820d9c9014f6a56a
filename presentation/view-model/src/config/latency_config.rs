use std::env;
use std::time::Duration;

const DEFAULT_LIST_DELAY_MS: u64 = 1000;
const DEFAULT_DETAIL_DELAY_MS: u64 = 500;
const DEFAULT_SEARCH_DELAY_MS: u64 = 300;

/// Simulated network latency applied by the view-models before each
/// use-case call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub list: Duration,
    pub detail: Duration,
    pub search: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(DEFAULT_LIST_DELAY_MS),
            detail: Duration::from_millis(DEFAULT_DETAIL_DELAY_MS),
            search: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
        }
    }
}

impl LatencyConfig {
    /// No simulated latency at all.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            detail: Duration::ZERO,
            search: Duration::ZERO,
        }
    }

    /// Load latency configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_LIST_DELAY_MS: delay before listing (default: 1000)
    /// - CATALOG_DETAIL_DELAY_MS: delay before a detail lookup (default: 500)
    /// - CATALOG_SEARCH_DELAY_MS: delay before a search or category filter (default: 300)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            list: parse_millis(env::var("CATALOG_LIST_DELAY_MS").ok(), defaults.list),
            detail: parse_millis(env::var("CATALOG_DETAIL_DELAY_MS").ok(), defaults.detail),
            search: parse_millis(env::var("CATALOG_SEARCH_DELAY_MS").ok(), defaults.search),
        }
    }
}

fn parse_millis(raw: Option<String>, default: Duration) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
