//! Route definitions for Artifacts domain API

use axum::{routing::get, Router};

use super::handlers::{artifacts, exports};
use super::middleware::ArtifactsState;

/// Create artifact CRUD routes
fn artifact_routes() -> Router<ArtifactsState> {
    Router::new()
        .route(
            "/v1/teams/{team_id}/artifacts",
            get(artifacts::list_artifacts).post(artifacts::create_artifact),
        )
        .route(
            "/v1/teams/{team_id}/artifacts/{id}",
            get(artifacts::get_artifact)
                .patch(artifacts::update_artifact)
                .delete(artifacts::delete_artifact),
        )
}

/// Create document export routes
fn export_routes() -> Router<ArtifactsState> {
    Router::new()
        .route(
            "/v1/teams/{team_id}/artifacts/{id}/export",
            get(exports::export_artifact),
        )
        .route(
            "/v1/teams/{team_id}/artifacts/{id}/preview",
            get(exports::preview_artifact),
        )
        .route("/v1/artifact-types", get(exports::list_artifact_types))
}

/// Create all Artifacts domain API routes
pub fn routes() -> Router<ArtifactsState> {
    Router::new()
        .merge(artifact_routes())
        .merge(export_routes())
}
