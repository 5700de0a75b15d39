//! Connector configuration.

use std::time::Duration;

/// Client-side throttling of requests sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained number of requests per second.
    pub requests_per_second: u32,
    /// Number of requests allowed in a burst.
    pub burst_size: u32,
}

/// Tunables of a [`crate::Gns3Connector`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    /// Total timeout of every HTTP call. `None` (the default) waits as long
    /// as the server takes, which node starts and image uploads may need.
    pub timeout: Option<Duration>,
    /// Proxy every request goes through (e.g. `http://proxy:8080`).
    pub proxy: Option<String>,
    /// Throttling, disabled by default.
    pub rate_limit: Option<RateLimitConfig>,
    /// Delay between a bulk node action and the refresh of the node list.
    pub poll_wait_time: Duration,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            proxy: None,
            rate_limit: None,
            poll_wait_time: Duration::from_secs(5),
        }
    }
}
