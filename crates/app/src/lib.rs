//! Launchpad application composition root
//!
//! Composes the domain routers and shared HTTP layers into one application.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use launchpad_artifacts::{ArtifactsRepositories, ArtifactsState};
use launchpad_common::Config;
use launchpad_exports::{Exporter, DEFAULT_BRAND_MARK};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let artifacts_state = ArtifactsState::new(
        ArtifactsRepositories::new(pool),
        Exporter::new(brand_mark(config)),
    );

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Launchpad API v0.0.1-SNAPSHOT" }))
        .merge(launchpad_artifacts::routes().with_state(artifacts_state))
}

/// Configured brand mark, else the exporter's default
fn brand_mark(config: &Config) -> &str {
    config.brand_mark.as_deref().unwrap_or(DEFAULT_BRAND_MARK)
}

/// CORS from a comma-separated origin list; `*` or empty allows any origin
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_DISPOSITION]);

    let origins: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "*")
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::info!("CORS: allowing all origins");
        cors.allow_origin(Any)
    } else {
        tracing::info!("CORS: allowing origins: {:?}", origins);
        cors.allow_origin(origins)
    }
}

/// Reject request bodies above `max_bytes`
pub fn body_limit_layer(max_bytes: usize) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(max_bytes)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
