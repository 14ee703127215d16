//! In-Memory Repository
//!
//! Backs tests and debug-build runs without a database. Every trait call
//! is counted so tests can assert that a request never reached storage.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::{
    owner::{ProfileWithOwner, UserSummary},
    profile::Profile,
};
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::error::{ProfileError, ProfileResult};

#[derive(Default)]
struct State {
    users: HashMap<UserId, UserSummary>,
    profiles: HashMap<UserId, Profile>,
}

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    state: Arc<RwLock<State>>,
    operations: Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user record (registration is not part of this service)
    pub async fn insert_user(&self, user: UserSummary) {
        self.state.write().await.users.insert(user.id, user);
    }

    /// Number of repository calls made so far
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Make every following call fail, as a lost database connection would
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn user_exists(&self, user_id: &UserId) -> bool {
        self.state.read().await.users.contains_key(user_id)
    }

    fn begin(&self) -> ProfileResult<()> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ProfileError::Internal("store unavailable".to_string()));
        }
        Ok(())
    }
}

fn with_owner(state: &State, profile: &Profile) -> ProfileWithOwner {
    ProfileWithOwner {
        profile: profile.clone(),
        owner: state.users.get(&profile.user_id).cloned(),
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn find_profile(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        self.begin()?;
        Ok(self.state.read().await.profiles.get(user_id).cloned())
    }

    async fn find_profile_with_owner(
        &self,
        user_id: &UserId,
    ) -> ProfileResult<Option<ProfileWithOwner>> {
        self.begin()?;
        let state = self.state.read().await;
        Ok(state.profiles.get(user_id).map(|p| with_owner(&state, p)))
    }

    async fn list_profiles_with_owner(&self) -> ProfileResult<Vec<ProfileWithOwner>> {
        self.begin()?;
        let state = self.state.read().await;
        let mut profiles: Vec<_> = state.profiles.values().collect();
        profiles.sort_by_key(|p| p.created_at);
        Ok(profiles.into_iter().map(|p| with_owner(&state, p)).collect())
    }

    async fn save_profile(&self, profile: &Profile) -> ProfileResult<()> {
        self.begin()?;
        let mut state = self.state.write().await;
        let stored = match state.profiles.get(&profile.user_id) {
            // Identity and creation time belong to the first insert
            Some(existing) => Profile {
                id: existing.id,
                created_at: existing.created_at,
                ..profile.clone()
            },
            None => profile.clone(),
        };
        state.profiles.insert(profile.user_id, stored);
        Ok(())
    }

    async fn delete_profile(&self, user_id: &UserId) -> ProfileResult<bool> {
        self.begin()?;
        Ok(self.state.write().await.profiles.remove(user_id).is_some())
    }
}

impl UserRepository for InMemoryProfileRepository {
    async fn delete_user(&self, user_id: &UserId) -> ProfileResult<bool> {
        self.begin()?;
        Ok(self.state.write().await.users.remove(user_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::profile::ProfilePatch;
    use crate::domain::value_object::skills::Skills;

    fn profile_for(user_id: UserId) -> Profile {
        Profile::create(
            user_id,
            ProfilePatch {
                status: Some("Developer".to_string()),
                skills: Some(Skills::parse("Rust")),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = InMemoryProfileRepository::new();
        let user_id = UserId::new();
        let profile = profile_for(user_id);

        repo.save_profile(&profile).await.unwrap();

        assert_eq!(repo.find_profile(&user_id).await.unwrap(), Some(profile));
        assert_eq!(repo.operation_count(), 2);
    }

    #[tokio::test]
    async fn test_save_keeps_first_identity() {
        let repo = InMemoryProfileRepository::new();
        let user_id = UserId::new();
        let first = profile_for(user_id);
        repo.save_profile(&first).await.unwrap();

        let mut second = profile_for(user_id);
        second.status = "Manager".to_string();
        repo.save_profile(&second).await.unwrap();

        let stored = repo.find_profile(&user_id).await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.status, "Manager");
    }

    #[tokio::test]
    async fn test_owner_join() {
        let repo = InMemoryProfileRepository::new();
        let user_id = UserId::new();
        repo.insert_user(UserSummary {
            id: user_id,
            name: "Ada".to_string(),
            avatar: None,
        })
        .await;
        repo.save_profile(&profile_for(user_id)).await.unwrap();

        let found = repo.find_profile_with_owner(&user_id).await.unwrap().unwrap();
        assert_eq!(found.owner.map(|o| o.name), Some("Ada".to_string()));

        let listed = repo.list_profiles_with_owner().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_call() {
        let repo = InMemoryProfileRepository::new();
        repo.set_unavailable(true);

        let err = repo.find_profile(&UserId::new()).await.unwrap_err();
        assert!(matches!(err, ProfileError::Internal(_)));
        assert_eq!(repo.operation_count(), 1);
    }
}
