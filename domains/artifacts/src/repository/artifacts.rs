//! Artifact repository

use crate::domain::entities::Artifact;
use launchpad_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the artifacts table, used for SELECT and RETURNING clauses.
const ARTIFACT_COLUMNS: &str = "\
    id, team_id, artifact_type, title, data, status, \
    created_by, created_at, updated_at";

#[derive(Clone)]
pub struct ArtifactRepository {
    pool: PgPool,
}

impl ArtifactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find artifact by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Artifact>> {
        let query = format!("SELECT {ARTIFACT_COLUMNS} FROM artifacts WHERE id = $1");
        let artifact = sqlx::query_as::<_, Artifact>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(artifact)
    }

    /// List a team's artifacts, most recently edited first
    pub async fn list_by_team(
        &self,
        team_id: Uuid,
        artifact_type: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             WHERE team_id = $1 AND ($2::text IS NULL OR artifact_type = $2) \
             ORDER BY updated_at DESC LIMIT $3 OFFSET $4"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .bind(team_id)
            .bind(artifact_type)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    /// Create a new artifact
    pub async fn create(&self, artifact: &Artifact) -> Result<Artifact> {
        let query = format!(
            "INSERT INTO artifacts ({ARTIFACT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {ARTIFACT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Artifact>(&query)
            .bind(artifact.id)
            .bind(artifact.team_id)
            .bind(&artifact.artifact_type)
            .bind(&artifact.title)
            .bind(&artifact.data)
            .bind(artifact.status)
            .bind(artifact.created_by)
            .bind(artifact.created_at)
            .bind(artifact.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Persist title, payload and status of an edited artifact
    pub async fn update(&self, artifact: &Artifact) -> Result<Option<Artifact>> {
        let query = format!(
            "UPDATE artifacts SET title = $2, data = $3, status = $4, updated_at = $5 \
             WHERE id = $1 RETURNING {ARTIFACT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Artifact>(&query)
            .bind(artifact.id)
            .bind(&artifact.title)
            .bind(&artifact.data)
            .bind(artifact.status)
            .bind(artifact.updated_at)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Delete an artifact
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM artifacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
