//! One renderer per artifact type
//!
//! A renderer projects an artifact's payload into document blocks. Renderers
//! never fail: missing or wrong-shaped fields become placeholders or empty
//! sections, and the block order is fixed per tool.

use serde_json::Value;

use crate::blocks::Block;
use crate::payload::ValueProposition;

pub mod company_name;
pub mod competitive_landscape;
pub mod compliance_checklist;
pub mod financial_model;
pub mod generic;
pub mod hypothesis_tracker;
pub mod mvp_definition;
pub mod pitch_deck;
pub mod problem_solution_fit;
pub mod value_proposition;
pub mod weekly_journal;

/// Payload + optional team value proposition → ordered blocks
pub type Renderer = fn(&Value, Option<&ValueProposition>) -> Vec<Block>;
