//! Repository implementations for Artifacts domain

pub mod artifacts;
pub mod teams;

use sqlx::PgPool;

pub use artifacts::ArtifactRepository;
pub use teams::TeamReadModel;

/// Combined repository access for the Artifacts domain
#[derive(Clone)]
pub struct ArtifactsRepositories {
    pub artifacts: ArtifactRepository,
    pub teams: TeamReadModel,
}

impl ArtifactsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            artifacts: ArtifactRepository::new(pool.clone()),
            teams: TeamReadModel::new(pool),
        }
    }
}
