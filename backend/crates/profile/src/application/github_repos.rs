//! GitHub Repositories Use Case
//!
//! Read-through lookup of a user's latest public repositories. Every
//! upstream failure, timeouts included, surfaces as
//! [`ProfileError::ExternalLookupFailed`].

use std::sync::Arc;

use crate::domain::entity::repo_summary::RepoSummary;
use crate::domain::repository::RepoFetcher;
use crate::error::{ProfileError, ProfileResult};

pub struct GithubReposUseCase<F>
where
    F: RepoFetcher,
{
    fetcher: Arc<F>,
}

impl<F> GithubReposUseCase<F>
where
    F: RepoFetcher,
{
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    pub async fn execute(&self, username: &str) -> ProfileResult<Vec<RepoSummary>> {
        let repos = self
            .fetcher
            .fetch_repos(username)
            .await
            .map_err(ProfileError::ExternalLookupFailed)?;

        tracing::debug!(username = %username, count = repos.len(), "Fetched repositories");

        Ok(repos)
    }
}
