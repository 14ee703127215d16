//! Upsert Profile Use Case
//!
//! One operation for create and update, told apart by whether the caller
//! already has a profile. Updates merge field by field; see
//! [`Profile::apply`].
//!
//! The read-modify-write is not atomic: two concurrent upserts by the same
//! caller can lose one of the updates.

use std::sync::Arc;

use auth::Identity;
use kernel::error::app_error::FieldError;

use crate::domain::entity::profile::{Profile, ProfilePatch, SKILLS_REQUIRED, STATUS_REQUIRED};
use crate::domain::repository::{ProfileRepository, ProfileStore};
use crate::domain::value_object::{
    field_update::FieldUpdate,
    skills::Skills,
    social::{SocialPatch, SocialPlatform},
};
use crate::error::ProfileResult;

/// Raw upsert fields; `None` means "not supplied"
#[derive(Debug, Clone, Default)]
pub struct UpsertProfileInput {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    /// Comma-separated
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileInput {
    /// Build the patch, rejecting a supplied-but-blank `status` or `skills`
    pub fn into_patch(self) -> Result<ProfilePatch, Vec<FieldError>> {
        let mut errors = Vec::new();

        let status = match self.status {
            Some(status) if status.trim().is_empty() => {
                errors.push(FieldError::new("status", STATUS_REQUIRED));
                None
            }
            other => other,
        };
        let skills = match self.skills.as_deref() {
            Some(raw) if raw.trim().is_empty() => {
                errors.push(FieldError::new("skills", SKILLS_REQUIRED));
                None
            }
            other => other.map(Skills::parse),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let social = SocialPatch::new()
            .with(SocialPlatform::Youtube, self.youtube)
            .with(SocialPlatform::Twitter, self.twitter)
            .with(SocialPlatform::Facebook, self.facebook)
            .with(SocialPlatform::Linkedin, self.linkedin)
            .with(SocialPlatform::Instagram, self.instagram);

        Ok(ProfilePatch {
            company: FieldUpdate::from_input(self.company),
            website: FieldUpdate::from_input(self.website),
            location: FieldUpdate::from_input(self.location),
            bio: FieldUpdate::from_input(self.bio),
            githubusername: FieldUpdate::from_input(self.githubusername),
            status,
            skills,
            social,
        })
    }
}

#[derive(Debug)]
pub struct UpsertProfileOutput {
    pub profile: Profile,
    pub created: bool,
}

pub struct UpsertProfileUseCase<R>
where
    R: ProfileStore,
{
    repo: Arc<R>,
}

impl<R> UpsertProfileUseCase<R>
where
    R: ProfileStore,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        input: UpsertProfileInput,
    ) -> ProfileResult<UpsertProfileOutput> {
        let patch = input.into_patch()?;

        let (profile, created) = match self.repo.find_profile(&identity.user_id).await? {
            Some(mut profile) => {
                profile.apply(patch);
                (profile, false)
            }
            None => (Profile::create(identity.user_id, patch)?, true),
        };

        self.repo.save_profile(&profile).await?;

        if created {
            tracing::info!(user_id = %identity.user_id, profile_id = %profile.id, "Profile created");
        } else {
            tracing::info!(user_id = %identity.user_id, profile_id = %profile.id, "Profile updated");
        }

        Ok(UpsertProfileOutput { profile, created })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_patch_blank_optional_clears() {
        let patch = UpsertProfileInput {
            bio: Some(String::new()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch.bio, FieldUpdate::Clear);
        assert_eq!(patch.company, FieldUpdate::Keep);
        assert_eq!(patch.status, None);
        assert!(patch.social.is_empty());
    }

    #[test]
    fn test_into_patch_rejects_blank_required() {
        let errors = UpsertProfileInput {
            status: Some("  ".into()),
            skills: Some(" ".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError::new("status", STATUS_REQUIRED),
                FieldError::new("skills", SKILLS_REQUIRED),
            ]
        );
    }

    #[test]
    fn test_into_patch_parses_skills() {
        let patch = UpsertProfileInput {
            skills: Some(" Rust ,Go".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch.skills.unwrap().as_slice(), ["Rust", "Go"]);
    }

    #[test]
    fn test_into_patch_keeps_empty_skill_segments() {
        let patch = UpsertProfileInput {
            skills: Some("a,,b".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();
        assert_eq!(patch.skills.unwrap().as_slice(), ["a", "", "b"]);

        let patch = UpsertProfileInput {
            skills: Some(",".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();
        assert_eq!(patch.skills.unwrap().as_slice(), ["", ""]);
    }
}
