//! Application Configuration

use std::fmt;
use std::time::Duration;

pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Profile application configuration
#[derive(Clone)]
pub struct ProfileConfig {
    /// Base URL of the GitHub REST API
    pub github_api_base_url: String,
    /// `User-Agent` sent upstream (GitHub rejects requests without one)
    pub github_user_agent: String,
    /// Optional bearer token for a higher upstream rate limit
    pub github_token: Option<String>,
    /// Number of repositories listed per lookup
    pub github_repo_page_size: u8,
    /// Upstream sort key
    pub github_repo_sort: String,
    /// Upstream sort direction
    pub github_repo_direction: String,
    /// Upper bound on one upstream lookup
    pub github_timeout: Duration,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            github_api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            github_user_agent: platform::http_client::DEFAULT_USER_AGENT.to_string(),
            github_token: None,
            github_repo_page_size: 5,
            github_repo_sort: "created".to_string(),
            github_repo_direction: "asc".to_string(),
            github_timeout: Duration::from_secs(10),
        }
    }
}

impl ProfileConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }

    /// Point the fetcher at another API host (tests, GitHub Enterprise)
    pub fn with_github_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_base_url = url.into();
        self
    }

    pub fn with_github_token(mut self, token: impl Into<String>) -> Self {
        self.github_token = Some(token.into());
        self
    }

    pub fn with_github_timeout(mut self, timeout: Duration) -> Self {
        self.github_timeout = timeout;
        self
    }
}

impl fmt::Debug for ProfileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileConfig")
            .field("github_api_base_url", &self.github_api_base_url)
            .field("github_user_agent", &self.github_user_agent)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("github_repo_page_size", &self.github_repo_page_size)
            .field("github_repo_sort", &self.github_repo_sort)
            .field("github_repo_direction", &self.github_repo_direction)
            .field("github_timeout", &self.github_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProfileConfig::default();
        assert_eq!(config.github_api_base_url, "https://api.github.com");
        assert_eq!(config.github_repo_page_size, 5);
        assert_eq!(config.github_repo_sort, "created");
        assert_eq!(config.github_repo_direction, "asc");
        assert_eq!(config.github_timeout, Duration::from_secs(10));
        assert!(config.github_token.is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ProfileConfig::default().with_github_token("ghp_secret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("ghp_secret"));
    }
}
