//! Domain layer for the Artifacts domain

pub mod entities;
pub mod state;
