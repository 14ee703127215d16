//! Get Own Profile Use Case

use std::sync::Arc;

use auth::Identity;

use crate::domain::entity::owner::ProfileWithOwner;
use crate::domain::repository::{ProfileRepository, ProfileStore};
use crate::error::{ProfileError, ProfileResult};

pub struct GetOwnProfileUseCase<R>
where
    R: ProfileStore,
{
    repo: Arc<R>,
}

impl<R> GetOwnProfileUseCase<R>
where
    R: ProfileStore,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity) -> ProfileResult<ProfileWithOwner> {
        self.repo
            .find_profile_with_owner(&identity.user_id)
            .await?
            .ok_or(ProfileError::NoProfileForUser)
    }
}
