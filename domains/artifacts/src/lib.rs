//! Artifacts domain: saved founder-tool artifacts and their document exports

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Artifact, ArtifactStatus};
pub use domain::state::{ArtifactEvent, ArtifactStateMachine};

// Re-export repository types
pub use repository::{ArtifactRepository, ArtifactsRepositories, TeamReadModel};

// Re-export API types
pub use api::routes;
pub use api::ArtifactsState;
