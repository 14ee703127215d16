//! Experience Use Cases
//!
//! Adding and removing entries of the caller's work history.

use std::sync::Arc;

use auth::Identity;
use kernel::error::app_error::FieldError;
use kernel::id::ExperienceId;

use super::validation::{Checker, optional};
use crate::domain::entity::{experience::NewExperience, profile::Profile};
use crate::domain::repository::{ProfileRepository, ProfileStore};
use crate::error::{ProfileError, ProfileResult};

/// Raw experience fields
#[derive(Debug, Clone, Default)]
pub struct AddExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl AddExperienceInput {
    pub fn validate(self) -> Result<NewExperience, Vec<FieldError>> {
        let mut checker = Checker::default();
        let title = checker.required("title", self.title, "Title is required");
        let company = checker.required("company", self.company, "Company is required");
        let from = checker.required_date("from", self.from, "From date is required");
        let to = checker.optional_date("to", self.to);
        checker.finish()?;

        match (title, company, from) {
            (Some(title), Some(company), Some(from)) => Ok(NewExperience {
                title,
                company,
                location: optional(self.location),
                from,
                to,
                current: self.current.unwrap_or(false),
                description: optional(self.description),
            }),
            _ => Err(vec![FieldError::message("Invalid experience")]),
        }
    }
}

pub struct ExperienceUseCase<R>
where
    R: ProfileStore,
{
    repo: Arc<R>,
}

impl<R> ExperienceUseCase<R>
where
    R: ProfileStore,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate, then insert as the newest entry
    pub async fn add(&self, identity: &Identity, input: AddExperienceInput) -> ProfileResult<Profile> {
        let fields = input.validate()?;
        let mut profile = self.load(identity).await?;

        let experience_id = profile.add_experience(fields);
        self.repo.save_profile(&profile).await?;

        tracing::info!(
            user_id = %identity.user_id,
            experience_id = %experience_id,
            "Experience added"
        );

        Ok(profile)
    }

    /// Remove the entry with the given id; unknown or malformed ids are a no-op
    pub async fn remove(&self, identity: &Identity, raw_id: &str) -> ProfileResult<Profile> {
        let mut profile = self.load(identity).await?;

        let removed = raw_id
            .parse::<ExperienceId>()
            .ok()
            .and_then(|id| profile.remove_experience(id));

        match removed {
            Some(entry) => {
                self.repo.save_profile(&profile).await?;
                tracing::info!(
                    user_id = %identity.user_id,
                    experience_id = %entry.id,
                    "Experience removed"
                );
            }
            None => {
                tracing::debug!(
                    user_id = %identity.user_id,
                    experience_id = %raw_id,
                    "No such experience"
                );
            }
        }

        Ok(profile)
    }

    async fn load(&self, identity: &Identity) -> ProfileResult<Profile> {
        self.repo
            .find_profile(&identity.user_id)
            .await?
            .ok_or(ProfileError::NoProfileForUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_requires_title_company_from() {
        let errors = AddExperienceInput::default().validate().unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.msg.as_ref()).collect();
        assert_eq!(
            messages,
            ["Title is required", "Company is required", "From date is required"]
        );
    }

    #[test]
    fn test_validate_accepts_optional_fields() {
        let fields = AddExperienceInput {
            title: Some("Engineer".into()),
            company: Some("Acme".into()),
            from: Some("2018-05-01T00:00:00Z".into()),
            to: Some(String::new()),
            current: Some(true),
            location: Some("  ".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(fields.from, NaiveDate::from_ymd_opt(2018, 5, 1).unwrap());
        assert_eq!(fields.to, None);
        assert_eq!(fields.location, None);
        assert!(fields.current);
    }

    #[test]
    fn test_validate_rejects_bad_from_date() {
        let errors = AddExperienceInput {
            title: Some("Engineer".into()),
            company: Some("Acme".into()),
            from: Some("yesterday".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError::new("from", "From date must be a valid date")]
        );
    }
}
