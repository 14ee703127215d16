//! Outbound HTTP client construction
//!
//! Every third-party call goes through a client built here so that
//! a request can never block longer than the configured timeout.

use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("devconnect-profile/", env!("CARGO_PKG_VERSION"));

/// Outbound client settings
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Sent as `User-Agent` (GitHub rejects requests without one)
    pub user_agent: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Build a `reqwest::Client` honouring the given settings
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
}
