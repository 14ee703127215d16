//! GitHub Repository Fetcher
//!
//! Lists a user's public repositories through the GitHub REST API. The
//! username is placed into the URL as an escaped path segment, so it can
//! never alter the path or query of the upstream request.

use std::sync::Arc;

use platform::http_client::{HttpClientConfig, build_http_client};
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};

use crate::application::config::ProfileConfig;
use crate::domain::entity::repo_summary::RepoSummary;
use crate::domain::repository::RepoFetcher;
use crate::error::{ProfileError, ProfileResult, UpstreamFailure};

/// Longest username GitHub allows
const MAX_USERNAME_LENGTH: usize = 39;

#[derive(Clone)]
pub struct GitHubRepoFetcher {
    client: reqwest::Client,
    base_url: Url,
    config: Arc<ProfileConfig>,
}

impl GitHubRepoFetcher {
    pub fn new(config: Arc<ProfileConfig>) -> ProfileResult<Self> {
        let base_url = Url::parse(&config.github_api_base_url).map_err(|e| {
            ProfileError::Internal(format!(
                "invalid GitHub API URL {}: {}",
                config.github_api_base_url, e
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ProfileError::Internal(format!(
                "GitHub API URL cannot be a base: {}",
                config.github_api_base_url
            )));
        }

        let client = build_http_client(&HttpClientConfig {
            user_agent: config.github_user_agent.clone(),
            timeout: config.github_timeout,
            ..Default::default()
        })
        .map_err(|e| ProfileError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// `{base}/users/{username}/repos?per_page=..&sort=..&direction=..`
    fn repos_url(&self, username: &str) -> Result<Url, UpstreamFailure> {
        if !is_valid_username(username) {
            return Err(UpstreamFailure::InvalidUsername(username.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamFailure::Transport("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.config.github_repo_page_size.to_string())
            .append_pair("sort", &self.config.github_repo_sort)
            .append_pair("direction", &self.config.github_repo_direction);

        Ok(url)
    }
}

impl RepoFetcher for GitHubRepoFetcher {
    async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoSummary>, UpstreamFailure> {
        let url = self.repos_url(username)?;

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.config.github_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_failure)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamFailure::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_failure)?;
        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| UpstreamFailure::InvalidBody(e.to_string()))?;

        match value {
            serde_json::Value::Array(items) => Ok(items.into_iter().map(RepoSummary::new).collect()),
            other => Err(UpstreamFailure::InvalidBody(format!(
                "expected an array, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn transport_failure(e: reqwest::Error) -> UpstreamFailure {
    if e.is_timeout() {
        UpstreamFailure::Timeout
    } else {
        UpstreamFailure::Transport(e.to_string())
    }
}

/// Alphanumerics and hyphens, not starting with a hyphen
fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= MAX_USERNAME_LENGTH
        && !username.starts_with('-')
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer, config: ProfileConfig) -> GitHubRepoFetcher {
        let config = config.with_github_api_base_url(server.uri());
        GitHubRepoFetcher::new(Arc::new(config)).unwrap()
    }

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("octocat"));
        assert!(is_valid_username("octo-cat-42"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("-octocat"));
        assert!(!is_valid_username("octo/../cat"));
        assert!(!is_valid_username("octo cat"));
        assert!(!is_valid_username(&"a".repeat(40)));
    }

    #[test]
    fn test_repos_url() {
        let config = ProfileConfig::default().with_github_api_base_url("https://ghe.example.com/api/v3/");
        let fetcher = GitHubRepoFetcher::new(Arc::new(config)).unwrap();

        let url = fetcher.repos_url("octocat").unwrap();

        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/users/octocat/repos?per_page=5&sort=created&direction=asc"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ProfileConfig::default().with_github_api_base_url("not a url");
        assert!(GitHubRepoFetcher::new(Arc::new(config)).is_err());
    }

    #[tokio::test]
    async fn test_fetch_repos_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "5"))
            .and(query_param("sort", "created"))
            .and(query_param("direction", "asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "hello-world", "stargazers_count": 3},
                {"name": "spoon-knife", "stargazers_count": 1}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let repos = fetcher_for(&server, ProfileConfig::default())
            .fetch_repos("octocat")
            .await
            .unwrap();

        let names: Vec<_> = repos.iter().filter_map(RepoSummary::name).collect();
        assert_eq!(names, ["hello-world", "spoon-knife"]);
    }

    #[tokio::test]
    async fn test_sends_bearer_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", "Bearer ghp_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = ProfileConfig::default().with_github_token("ghp_test");
        let repos = fetcher_for(&server, config).fetch_repos("octocat").await.unwrap();

        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetcher_for(&server, ProfileConfig::default())
            .fetch_repos("ghost")
            .await
            .unwrap_err();

        assert_eq!(err, UpstreamFailure::Status(404));
    }

    #[tokio::test]
    async fn test_object_body_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "API rate limit exceeded"})),
            )
            .mount(&server)
            .await;

        let err = fetcher_for(&server, ProfileConfig::default())
            .fetch_repos("octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamFailure::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = ProfileConfig::default().with_github_timeout(Duration::from_millis(100));
        let err = fetcher_for(&server, config)
            .fetch_repos("octocat")
            .await
            .unwrap_err();

        assert_eq!(err, UpstreamFailure::Timeout);
    }

    #[tokio::test]
    async fn test_invalid_username_never_reaches_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = fetcher_for(&server, ProfileConfig::default())
            .fetch_repos("../admin")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamFailure::InvalidUsername(_)));
    }
}
