//! Account Cascade Implementations

use kernel::id::UserId;

use crate::domain::repository::AccountCascade;
use crate::error::ProfileResult;

/// Cascade for deployments where users own nothing besides their profile
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOwnedResources;

impl AccountCascade for NoOwnedResources {
    async fn delete_owned_by(&self, _user_id: &UserId) -> ProfileResult<u64> {
        Ok(0)
    }
}
