//! Education Use Cases

use std::sync::Arc;

use auth::Identity;
use kernel::error::app_error::FieldError;
use kernel::id::EducationId;

use super::validation::{Checker, optional};
use crate::domain::entity::{education::NewEducation, profile::Profile};
use crate::domain::repository::{ProfileRepository, ProfileStore};
use crate::error::{ProfileError, ProfileResult};

/// Raw education fields
#[derive(Debug, Clone, Default)]
pub struct AddEducationInput {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl AddEducationInput {
    pub fn validate(self) -> Result<NewEducation, Vec<FieldError>> {
        let mut checker = Checker::default();
        let school = checker.required("school", self.school, "School is required");
        let degree = checker.required("degree", self.degree, "Degree is required");
        let fieldofstudy =
            checker.required("fieldofstudy", self.fieldofstudy, "Field of study is required");
        let from = checker.required_date("from", self.from, "From date is required");
        let to = checker.optional_date("to", self.to);
        checker.finish()?;

        match (school, degree, fieldofstudy, from) {
            (Some(school), Some(degree), Some(fieldofstudy), Some(from)) => Ok(NewEducation {
                school,
                degree,
                fieldofstudy,
                from,
                to,
                current: self.current.unwrap_or(false),
                description: optional(self.description),
            }),
            _ => Err(vec![FieldError::message("Invalid education")]),
        }
    }
}

pub struct EducationUseCase<R>
where
    R: ProfileStore,
{
    repo: Arc<R>,
}

impl<R> EducationUseCase<R>
where
    R: ProfileStore,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn add(&self, identity: &Identity, input: AddEducationInput) -> ProfileResult<Profile> {
        let fields = input.validate()?;
        let mut profile = self.load(identity).await?;

        let education_id = profile.add_education(fields);
        self.repo.save_profile(&profile).await?;

        tracing::info!(
            user_id = %identity.user_id,
            education_id = %education_id,
            "Education added"
        );

        Ok(profile)
    }

    /// Remove the entry with the given id; unknown or malformed ids are a no-op
    pub async fn remove(&self, identity: &Identity, raw_id: &str) -> ProfileResult<Profile> {
        let mut profile = self.load(identity).await?;

        let removed = raw_id
            .parse::<EducationId>()
            .ok()
            .and_then(|id| profile.remove_education(id));

        match removed {
            Some(entry) => {
                self.repo.save_profile(&profile).await?;
                tracing::info!(
                    user_id = %identity.user_id,
                    education_id = %entry.id,
                    "Education removed"
                );
            }
            None => {
                tracing::debug!(
                    user_id = %identity.user_id,
                    education_id = %raw_id,
                    "No such education"
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

    #[test]
    fn test_validate_messages() {
        let errors = AddEducationInput {
            school: Some("MIT".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        let messages: Vec<_> = errors.iter().map(|e| e.msg.as_ref()).collect();
        assert_eq!(
            messages,
            [
                "Degree is required",
                "Field of study is required",
                "From date is required"
            ]
        );
    }

    #[test]
    fn test_validate_ok() {
        let fields = AddEducationInput {
            school: Some("MIT".into()),
            degree: Some("BSc".into()),
            fieldofstudy: Some("CS".into()),
            from: Some("2010-09-01".into()),
            to: Some("2014-06-30".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(fields.school, "MIT");
        assert!(fields.to.is_some());
        assert!(!fields.current);
    }
}
