//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::{AuthConfig, AuthGate};
use axum::{
    Json, Router,
    http::{self, HeaderName, Method, header},
    routing::get,
};
use profile::{
    GitHubRepoFetcher, InMemoryProfileRepository, NoOwnedResources, PgProfileRepository,
    ProfileConfig, profile_router, profile_router_generic,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,profile=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let auth_config = Arc::new(load_auth_config()?);
    let token_header: HeaderName = auth_config
        .token_header
        .parse()
        .with_context(|| format!("invalid AUTH_TOKEN_HEADER: {}", auth_config.token_header))?;
    let gate = AuthGate::new(auth_config);

    // Profile configuration
    let profile_config = Arc::new(load_profile_config()?);
    tracing::info!(config = ?profile_config, "Profile configuration loaded");
    let fetcher = GitHubRepoFetcher::new(profile_config).context("failed to build GitHub client")?;

    // Storage
    let profile_api = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await
                .context("failed to connect to database")?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            profile_router(PgProfileRepository::new(pool), fetcher, gate)
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage");
            profile_router_generic(
                InMemoryProfileRepository::new(),
                fetcher,
                NoOwnedResources,
                gate,
            )
        }
        Err(_) => anyhow::bail!("DATABASE_URL must be set in production"),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            token_header,
        ]));

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/profile", profile_api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("PORT") {
        Ok(port) => port.parse().with_context(|| format!("invalid PORT: {}", port))?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => AuthConfig::with_secret(secret),
        _ if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using a random secret");
            AuthConfig::development()
        }
        _ => anyhow::bail!("JWT_SECRET must be set in production"),
    };

    if let Ok(token_header) = env::var("AUTH_TOKEN_HEADER") {
        config.token_header = token_header.to_ascii_lowercase();
    }

    Ok(config)
}

fn load_profile_config() -> anyhow::Result<ProfileConfig> {
    let mut config = ProfileConfig::default();

    if let Ok(url) = env::var("GITHUB_API_BASE_URL") {
        config = config.with_github_api_base_url(url);
    }
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        if !token.is_empty() {
            config = config.with_github_token(token);
        }
    }
    if let Ok(secs) = env::var("GITHUB_TIMEOUT_SECS") {
        let secs: u64 = secs
            .parse()
            .with_context(|| format!("invalid GITHUB_TIMEOUT_SECS: {}", secs))?;
        config = config.with_github_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}
