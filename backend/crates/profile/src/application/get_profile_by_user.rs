//! Get Profile By User Use Case
//!
//! Public lookup by the owner's id. A malformed id is reported exactly like
//! an absent profile.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::owner::ProfileWithOwner;
use crate::domain::repository::{ProfileRepository, ProfileStore};
use crate::error::{ProfileError, ProfileResult};

pub struct GetProfileByUserUseCase<R>
where
    R: ProfileStore,
{
    repo: Arc<R>,
}

impl<R> GetProfileByUserUseCase<R>
where
    R: ProfileStore,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_user_id: &str) -> ProfileResult<ProfileWithOwner> {
        let user_id: UserId = raw_user_id
            .parse()
            .map_err(|_| ProfileError::MalformedUserId(raw_user_id.to_string()))?;

        self.repo
            .find_profile_with_owner(&user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)
    }
}
