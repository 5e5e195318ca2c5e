//! Shared utilities, configuration, and error handling for Launchpad
//!
//! This crate provides common functionality used across the Launchpad service:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Request extractors shared by the domain routers

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
pub use state::StateError;
