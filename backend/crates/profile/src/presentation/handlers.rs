//! HTTP Handlers
//!
//! Handlers behind the auth gate take the [`Identity`] the gate stored in
//! the request extensions; the gate runs before any of them.

use std::sync::Arc;

use auth::Identity;
use axum::Json;
use axum::extract::{Extension, Path, State};
use axum_extra::extract::WithRejection;
use kernel::error::app_error::AppError;

use crate::application::delete_account::{ACCOUNT_DELETED, DeleteAccountUseCase};
use crate::application::education::EducationUseCase;
use crate::application::experience::ExperienceUseCase;
use crate::application::get_own_profile::GetOwnProfileUseCase;
use crate::application::get_profile_by_user::GetProfileByUserUseCase;
use crate::application::github_repos::GithubReposUseCase;
use crate::application::list_profiles::ListProfilesUseCase;
use crate::application::upsert_profile::UpsertProfileUseCase;
use crate::domain::entity::repo_summary::RepoSummary;
use crate::domain::repository::{AccountCascade, ProfileStore, RepoFetcher};
use crate::error::{ProfileError, ProfileResult};
use crate::presentation::dto::{
    AddEducationRequest, AddExperienceRequest, ProfileResponse, UpsertProfileRequest,
};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<R, F, C>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    pub repo: Arc<R>,
    pub fetcher: Arc<F>,
    pub cascade: Arc<C>,
}

/// GET /api/profile/me
pub async fn get_own_profile<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Extension(identity): Extension<Identity>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = GetOwnProfileUseCase::new(state.repo.clone());

    let found = use_case.execute(&identity).await?;

    Ok(Json(found.into()))
}

/// POST /api/profile
pub async fn upsert_profile<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Extension(identity): Extension<Identity>,
    WithRejection(Json(req), _): WithRejection<Json<UpsertProfileRequest>, AppError>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    req.check_required().map_err(ProfileError::ValidationFailed)?;

    let use_case = UpsertProfileUseCase::new(state.repo.clone());

    let output = use_case.execute(&identity, req.into_input()).await?;

    Ok(Json(ProfileResponse::with_owner_id(output.profile)))
}

/// GET /api/profile
pub async fn list_profiles<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
) -> ProfileResult<Json<Vec<ProfileResponse>>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = ListProfilesUseCase::new(state.repo.clone());

    let profiles = use_case.execute().await?;

    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// GET /api/profile/user/{user_id}
pub async fn get_profile_by_user<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Path(user_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = GetProfileByUserUseCase::new(state.repo.clone());

    let found = use_case.execute(&user_id).await?;

    Ok(Json(found.into()))
}

/// DELETE /api/profile
pub async fn delete_account<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Extension(identity): Extension<Identity>,
) -> ProfileResult<Json<&'static str>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = DeleteAccountUseCase::new(state.repo.clone(), state.cascade.clone());

    use_case.execute(&identity).await?;

    Ok(Json(ACCOUNT_DELETED))
}

/// PUT /api/profile/experience
pub async fn add_experience<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Extension(identity): Extension<Identity>,
    WithRejection(Json(req), _): WithRejection<Json<AddExperienceRequest>, AppError>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = ExperienceUseCase::new(state.repo.clone());

    let profile = use_case.add(&identity, req.into()).await?;

    Ok(Json(ProfileResponse::with_owner_id(profile)))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Extension(identity): Extension<Identity>,
    Path(exp_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = ExperienceUseCase::new(state.repo.clone());

    let profile = use_case.remove(&identity, &exp_id).await?;

    Ok(Json(ProfileResponse::with_owner_id(profile)))
}

/// PUT /api/profile/education
pub async fn add_education<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Extension(identity): Extension<Identity>,
    WithRejection(Json(req), _): WithRejection<Json<AddEducationRequest>, AppError>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = EducationUseCase::new(state.repo.clone());

    let profile = use_case.add(&identity, req.into()).await?;

    Ok(Json(ProfileResponse::with_owner_id(profile)))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Extension(identity): Extension<Identity>,
    Path(edu_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = EducationUseCase::new(state.repo.clone());

    let profile = use_case.remove(&identity, &edu_id).await?;

    Ok(Json(ProfileResponse::with_owner_id(profile)))
}

/// GET /api/profile/github/{username}
pub async fn github_repos<R, F, C>(
    State(state): State<ProfileAppState<R, F, C>>,
    Path(username): Path<String>,
) -> ProfileResult<Json<Vec<RepoSummary>>>
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let use_case = GithubReposUseCase::new(state.fetcher.clone());

    let repos = use_case.execute(&username).await?;

    Ok(Json(repos))
}
