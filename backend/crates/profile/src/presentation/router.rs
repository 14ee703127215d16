//! Profile Router
//!
//! Public reads and the GitHub lookup are open. Everything that acts for
//! the caller sits behind [`require_auth`]. The gate is a `route_layer`, so
//! unmatched paths answer 404, not 401.

use std::sync::Arc;

use auth::{AuthGate, require_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::domain::repository::{AccountCascade, ProfileStore, RepoFetcher};
use crate::infra::{cascade::NoOwnedResources, github::GitHubRepoFetcher, postgres::PgProfileRepository};
use crate::presentation::handlers::{self, ProfileAppState};

/// Create the profile router with the PostgreSQL repository and GitHub fetcher
pub fn profile_router(repo: PgProfileRepository, fetcher: GitHubRepoFetcher, gate: AuthGate) -> Router {
    profile_router_generic(repo, fetcher, NoOwnedResources, gate)
}

/// Create a generic profile router for any storage, fetcher and cascade
pub fn profile_router_generic<R, F, C>(repo: R, fetcher: F, cascade: C, gate: AuthGate) -> Router
where
    R: ProfileStore + Clone,
    F: RepoFetcher + Clone + Sync + 'static,
    C: AccountCascade + Clone + Sync + 'static,
{
    let state = ProfileAppState {
        repo: Arc::new(repo),
        fetcher: Arc::new(fetcher),
        cascade: Arc::new(cascade),
    };

    let protected = Router::new()
        .route("/me", get(handlers::get_own_profile::<R, F, C>))
        .route(
            "/",
            post(handlers::upsert_profile::<R, F, C>)
                .delete(handlers::delete_account::<R, F, C>),
        )
        .route("/experience", put(handlers::add_experience::<R, F, C>))
        .route(
            "/experience/{exp_id}",
            delete(handlers::remove_experience::<R, F, C>),
        )
        .route("/education", put(handlers::add_education::<R, F, C>))
        .route(
            "/education/{edu_id}",
            delete(handlers::remove_education::<R, F, C>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth));

    let public = Router::new()
        .route("/", get(handlers::list_profiles::<R, F, C>))
        .route(
            "/user/{user_id}",
            get(handlers::get_profile_by_user::<R, F, C>),
        )
        .route("/github/{username}", get(handlers::github_repos::<R, F, C>));

    protected.merge(public).with_state(state)
}
