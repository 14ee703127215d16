//! Delete Account Use Case
//!
//! Removes, in order: resources the caller owns elsewhere (through the
//! [`AccountCascade`] hook), the caller's profile, then the user record.
//! There is no transaction across the steps. A failure after the profile
//! is gone leaves a user without a profile, which every read tolerates.

use std::sync::Arc;

use auth::Identity;

use crate::domain::repository::{AccountCascade, ProfileRepository, ProfileStore, UserRepository};
use crate::error::ProfileResult;

pub const ACCOUNT_DELETED: &str = "Profile and user deleted";

pub struct DeleteAccountUseCase<R, C>
where
    R: ProfileStore,
    C: AccountCascade,
{
    repo: Arc<R>,
    cascade: Arc<C>,
}

impl<R, C> DeleteAccountUseCase<R, C>
where
    R: ProfileStore,
    C: AccountCascade,
{
    pub fn new(repo: Arc<R>, cascade: Arc<C>) -> Self {
        Self { repo, cascade }
    }

    pub async fn execute(&self, identity: &Identity) -> ProfileResult<()> {
        let user_id = identity.user_id;

        let owned = self.cascade.delete_owned_by(&user_id).await?;
        let had_profile = self.repo.delete_profile(&user_id).await?;

        if let Err(e) = self.repo.delete_user(&user_id).await {
            tracing::warn!(
                user_id = %user_id,
                error = %e,
                "Profile deleted but user record remains"
            );
            return Err(e);
        }

        tracing::info!(
            user_id = %user_id,
            had_profile = had_profile,
            owned_resources = owned,
            "Account deleted"
        );

        Ok(())
    }
}
