//! Document export handlers
//!
//! Exports are generated per request and streamed back; nothing is stored.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use launchpad_common::{Error, Result};
use launchpad_exports::{render_blocks, ArtifactType, Block, Phase, CATALOG};
use serde::Serialize;
use uuid::Uuid;

use super::artifacts::find_team_artifact;
use crate::api::middleware::ArtifactsState;

/// Blocks an export would contain, for in-app preview
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub artifact_type: String,
    pub title: String,
    pub team_name: String,
    pub blocks: Vec<Block>,
}

/// Catalog entry DTO
#[derive(Debug, Serialize)]
pub struct ArtifactTypeResponse {
    pub tag: &'static str,
    pub title: &'static str,
    pub phase: Phase,
    pub bespoke_renderer: bool,
    pub includes_value_proposition: bool,
}

/// Render an artifact to `.docx` and return it as a download
pub async fn export_artifact(
    State(state): State<ArtifactsState>,
    Path((team_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Response> {
    let artifact = find_team_artifact(&state, team_id, id).await?;

    let (team_name, value_proposition) = tokio::try_join!(
        state.repos.teams.team_name(team_id),
        state.repos.teams.value_proposition(team_id),
    )?;

    let filename = export_filename(&artifact.title, &artifact.artifact_type);
    let kind = ArtifactType::from_tag(&artifact.artifact_type);
    let data = artifact.data.0;
    let exporter = state.exporter.clone();

    let document = tokio::task::spawn_blocking(move || {
        exporter.export(&kind, &data, value_proposition.as_ref(), &team_name)
    })
    .await
    .map_err(|e| Error::Internal(format!("Export task failed: {e}")))??;

    tracing::info!(
        artifact_id = %id,
        team_id = %team_id,
        filename = %filename,
        "Artifact exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, document.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        document.bytes,
    )
        .into_response())
}

/// Return the blocks an export would render, as JSON
pub async fn preview_artifact(
    State(state): State<ArtifactsState>,
    Path((team_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<PreviewResponse>> {
    let artifact = find_team_artifact(&state, team_id, id).await?;

    let (team_name, value_proposition) = tokio::try_join!(
        state.repos.teams.team_name(team_id),
        state.repos.teams.value_proposition(team_id),
    )?;

    let kind = ArtifactType::from_tag(&artifact.artifact_type);
    let blocks = render_blocks(&kind, &artifact.data.0, value_proposition.as_ref());

    Ok(Json(PreviewResponse {
        title: kind.title(),
        artifact_type: artifact.artifact_type,
        team_name,
        blocks,
    }))
}

/// List every tool in the catalog with its export capabilities
#[mutants::skip] // Thin wrapper over artifact_types()
pub async fn list_artifact_types() -> Json<Vec<ArtifactTypeResponse>> {
    Json(artifact_types())
}

fn artifact_types() -> Vec<ArtifactTypeResponse> {
    CATALOG
        .iter()
        .map(|info| {
            let kind = ArtifactType::from_tag(info.tag);
            ArtifactTypeResponse {
                tag: info.tag,
                title: info.title,
                phase: info.phase,
                bespoke_renderer: kind.has_bespoke_renderer(),
                includes_value_proposition: kind.supports_value_proposition(),
            }
        })
        .collect()
}

/// Download filename: slug of the title, else of the type tag, plus `.docx`
pub fn export_filename(title: &str, artifact_type: &str) -> String {
    let slug = match slugify(title) {
        s if s.is_empty() => slugify(artifact_type),
        s => s,
    };
    let slug = if slug.is_empty() {
        "artifact".to_string()
    } else {
        slug
    };
    format!("{slug}.{}", launchpad_exports::DOCX_EXTENSION)
}

/// Lowercase ASCII alphanumerics; every other run of characters becomes one `-`
fn slugify(text: &str) -> String {
    text.to_ascii_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
