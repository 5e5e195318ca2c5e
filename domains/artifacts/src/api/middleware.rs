//! Artifacts domain state

use crate::ArtifactsRepositories;
use launchpad_exports::Exporter;

/// Application state for the Artifacts domain
#[derive(Clone)]
pub struct ArtifactsState {
    pub repos: ArtifactsRepositories,
    pub exporter: Exporter,
}

impl ArtifactsState {
    pub fn new(repos: ArtifactsRepositories, exporter: Exporter) -> Self {
        Self { repos, exporter }
    }
}
