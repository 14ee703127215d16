//! List Profiles Use Case

use std::sync::Arc;

use crate::domain::entity::owner::ProfileWithOwner;
use crate::domain::repository::{ProfileRepository, ProfileStore};
use crate::error::ProfileResult;

pub struct ListProfilesUseCase<R>
where
    R: ProfileStore,
{
    repo: Arc<R>,
}

impl<R> ListProfilesUseCase<R>
where
    R: ProfileStore,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every profile with its owner, in storage order
    pub async fn execute(&self) -> ProfileResult<Vec<ProfileWithOwner>> {
        self.repo.list_profiles_with_owner().await
    }
}
