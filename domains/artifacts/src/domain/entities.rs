//! Domain entities for the Artifacts domain
//!
//! An artifact is one saved instance of a founder tool. Its `data` payload is
//! whatever the tool's form saved; only the outer shape (a JSON object) is
//! checked here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use std::sync::LazyLock;
use uuid::Uuid;

use launchpad_common::{Error, Result};

use crate::domain::state::{ArtifactEvent, ArtifactStateMachine};

/// Artifact type tags: lowercase words joined by underscores
static ARTIFACT_TYPE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9_]+$").expect("artifact type regex is valid"));

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Artifact status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "artifact_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    #[default]
    Draft,
    Complete,
}

impl std::fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactStatus::Draft => write!(f, "draft"),
            ArtifactStatus::Complete => write!(f, "complete"),
        }
    }
}

/// Artifact entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artifact {
    pub id: Uuid,
    pub team_id: Uuid,
    pub artifact_type: String,
    pub title: String,
    pub data: Json<Value>,
    pub status: ArtifactStatus,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artifact {
    /// Create a new draft artifact
    pub fn new(
        team_id: Uuid,
        created_by: Uuid,
        artifact_type: impl Into<String>,
        title: impl Into<String>,
        data: Value,
    ) -> Result<Self> {
        let now = Utc::now();
        let artifact = Self {
            id: Uuid::new_v4(),
            team_id,
            artifact_type: artifact_type.into(),
            title: title.into(),
            data: Json(data),
            status: ArtifactStatus::default(),
            created_by,
            created_at: now,
            updated_at: now,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Replace the title and/or payload on save
    pub fn update(&mut self, title: Option<String>, data: Option<Value>) -> Result<()> {
        if let Some(title) = title {
            validate_title(&title)?;
            self.title = title;
        }
        if let Some(data) = data {
            validate_data(&data)?;
            self.data = Json(data);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Mark the artifact complete
    pub fn complete(&mut self) -> Result<()> {
        self.apply(ArtifactEvent::Complete)
    }

    /// Return a completed artifact to draft
    pub fn reopen(&mut self) -> Result<()> {
        self.apply(ArtifactEvent::Reopen)
    }

    /// Move to `status` through the state machine
    pub fn set_status(&mut self, status: ArtifactStatus) -> Result<()> {
        match status {
            ArtifactStatus::Complete => self.complete(),
            ArtifactStatus::Draft => self.reopen(),
        }
    }

    fn apply(&mut self, event: ArtifactEvent) -> Result<()> {
        self.status = ArtifactStateMachine::transition(self.status, event)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn belongs_to(&self, team_id: Uuid) -> bool {
        self.team_id == team_id
    }

    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_data(&self.data.0)?;

        if !ARTIFACT_TYPE_REGEX.is_match(&self.artifact_type) {
            return Err(Error::Validation(format!(
                "Invalid artifact type '{}': use lowercase letters, digits and underscores",
                self.artifact_type
            )));
        }

        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    let length = title.trim().chars().count();
    if length == 0 {
        return Err(Error::Validation("Title cannot be empty".to_string()));
    }
    if length > MAX_TITLE_LENGTH {
        return Err(Error::Validation(format!(
            "Title cannot exceed {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_data(data: &Value) -> Result<()> {
    if !data.is_object() {
        return Err(Error::Validation(
            "Artifact data must be a JSON object".to_string(),
        ));
    }
    Ok(())
}
