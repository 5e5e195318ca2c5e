//! Artifact management API handlers
//!
//! Routes are team-scoped by path; an artifact requested under another
//! team's path is reported as not found.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use launchpad_common::{Error, Pagination, Result, ValidatedJson};
use launchpad_exports::ArtifactType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ArtifactsState;
use crate::domain::entities::{Artifact, ArtifactStatus};

/// Request for creating an artifact on first save
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArtifactRequest {
    #[validate(length(min = 1, max = 64))]
    pub artifact_type: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Form payload (defaults to an empty object)
    #[serde(default)]
    pub data: Option<Value>,

    /// Founder who saved the form
    pub created_by: Uuid,
}

/// Request for saving changes to an artifact
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateArtifactRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub data: Option<Value>,

    pub status: Option<ArtifactStatus>,
}

/// Optional filter for the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ArtifactFilter {
    pub artifact_type: Option<String>,
}

/// Artifact response DTO
#[derive(Debug, Serialize)]
pub struct ArtifactResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub artifact_type: String,
    pub type_title: String,
    pub title: String,
    pub data: Value,
    pub status: ArtifactStatus,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Artifact> for ArtifactResponse {
    fn from(a: Artifact) -> Self {
        Self {
            type_title: ArtifactType::from_tag(&a.artifact_type).title(),
            id: a.id,
            team_id: a.team_id,
            artifact_type: a.artifact_type,
            title: a.title,
            data: a.data.0,
            status: a.status,
            created_by: a.created_by,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

fn artifact_not_found() -> Error {
    Error::NotFound("Artifact not found".to_string())
}

/// A delete that matched no row lost a race with another delete
fn ensure_deleted(deleted: bool) -> Result<()> {
    deleted.then_some(()).ok_or_else(artifact_not_found)
}

/// Fetch an artifact, hiding artifacts owned by other teams
pub(crate) async fn find_team_artifact(
    state: &ArtifactsState,
    team_id: Uuid,
    id: Uuid,
) -> Result<Artifact> {
    state
        .repos
        .artifacts
        .find(id)
        .await?
        .filter(|artifact| artifact.belongs_to(team_id))
        .ok_or_else(artifact_not_found)
}

/// List a team's artifacts
pub async fn list_artifacts(
    State(state): State<ArtifactsState>,
    Path(team_id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<ArtifactFilter>,
) -> Result<Json<Vec<ArtifactResponse>>> {
    let artifacts = state
        .repos
        .artifacts
        .list_by_team(
            team_id,
            filter.artifact_type.as_deref(),
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    let responses: Vec<ArtifactResponse> = artifacts.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a single artifact by ID
pub async fn get_artifact(
    State(state): State<ArtifactsState>,
    Path((team_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ArtifactResponse>> {
    let artifact = find_team_artifact(&state, team_id, id).await?;
    Ok(Json(artifact.into()))
}

/// Create an artifact
pub async fn create_artifact(
    State(state): State<ArtifactsState>,
    Path(team_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateArtifactRequest>,
) -> Result<(StatusCode, Json<ArtifactResponse>)> {
    let data = req
        .data
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

    let artifact = Artifact::new(team_id, req.created_by, req.artifact_type, req.title, data)?;
    let created = state.repos.artifacts.create(&artifact).await?;

    tracing::info!(
        artifact_id = %created.id,
        team_id = %team_id,
        artifact_type = %created.artifact_type,
        "Artifact created"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Save changes to an artifact
pub async fn update_artifact(
    State(state): State<ArtifactsState>,
    Path((team_id, id)): Path<(Uuid, Uuid)>,
    ValidatedJson(req): ValidatedJson<UpdateArtifactRequest>,
) -> Result<Json<ArtifactResponse>> {
    let mut artifact = find_team_artifact(&state, team_id, id).await?;

    artifact.update(req.title, req.data)?;
    if let Some(status) = req.status.filter(|status| *status != artifact.status) {
        artifact.set_status(status)?;
    }

    let updated = state
        .repos
        .artifacts
        .update(&artifact)
        .await?
        .ok_or_else(artifact_not_found)?;

    Ok(Json(updated.into()))
}

/// Delete an artifact
pub async fn delete_artifact(
    State(state): State<ArtifactsState>,
    Path((team_id, id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode> {
    find_team_artifact(&state, team_id, id).await?;

    ensure_deleted(state.repos.artifacts.delete(id).await?)?;
    Ok(StatusCode::NO_CONTENT)
}
