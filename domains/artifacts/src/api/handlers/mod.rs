//! HTTP handlers for the Artifacts domain

pub mod artifacts;
pub mod exports;
