//! Artifact type registry
//!
//! Maps an artifact's `artifact_type` tag to the renderer for its payload.
//! Resolution is total: tags without a bespoke renderer, including tags
//! nobody has heard of, resolve to the generic key/value renderer.

use std::fmt;

use serde::Serialize;

use crate::format::humanize_key;
use crate::renderers::{self, Renderer};

/// Stage of the founder journey a tool belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idea,
    Validate,
    Build,
    Launch,
    Scale,
}

/// Catalog entry for one tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub tag: &'static str,
    pub title: &'static str,
    pub phase: Phase,
}

/// Every tool the product offers, in journey order
pub const CATALOG: &[ToolInfo] = &[
    ToolInfo { tag: "company_name", title: "Company Name Checker", phase: Phase::Idea },
    ToolInfo { tag: "value_proposition", title: "Value Proposition", phase: Phase::Idea },
    ToolInfo { tag: "hypothesis_tracker", title: "Hypothesis Tracker", phase: Phase::Validate },
    ToolInfo { tag: "problem_solution_fit", title: "Problem-Solution Fit", phase: Phase::Validate },
    ToolInfo { tag: "competitive_landscape", title: "Competitive Landscape", phase: Phase::Validate },
    ToolInfo { tag: "mvp_definition", title: "MVP Definition", phase: Phase::Build },
    ToolInfo { tag: "weekly_journal", title: "Weekly Journal", phase: Phase::Build },
    ToolInfo { tag: "pitch_deck", title: "Pitch Deck", phase: Phase::Launch },
    ToolInfo { tag: "financial_model", title: "Financial Model", phase: Phase::Launch },
    ToolInfo { tag: "compliance_checklist", title: "Compliance Checklist", phase: Phase::Launch },
    ToolInfo { tag: "scaling_readiness", title: "Scaling Readiness", phase: Phase::Scale },
    ToolInfo { tag: "gtm_playbook", title: "GTM Playbook", phase: Phase::Scale },
    ToolInfo { tag: "okr_tracker", title: "OKR Tracker", phase: Phase::Scale },
    ToolInfo { tag: "hiring_plan", title: "Hiring Plan", phase: Phase::Scale },
    ToolInfo { tag: "fundraising_tracker", title: "Fundraising Tracker", phase: Phase::Scale },
];

/// Look up a tag in the catalog
pub fn tool_info(tag: &str) -> Option<&'static ToolInfo> {
    CATALOG.iter().find(|info| info.tag == tag)
}

/// Artifact types with a bespoke renderer; everything else is `Other`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    CompanyName,
    ValueProposition,
    HypothesisTracker,
    ProblemSolutionFit,
    CompetitiveLandscape,
    MvpDefinition,
    PitchDeck,
    FinancialModel,
    ComplianceChecklist,
    WeeklyJournal,
    Other(String),
}

impl ArtifactType {
    /// Parse a type tag. Never fails; unrecognised tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "company_name" => Self::CompanyName,
            "value_proposition" => Self::ValueProposition,
            "hypothesis_tracker" => Self::HypothesisTracker,
            "problem_solution_fit" => Self::ProblemSolutionFit,
            "competitive_landscape" => Self::CompetitiveLandscape,
            "mvp_definition" => Self::MvpDefinition,
            "pitch_deck" => Self::PitchDeck,
            "financial_model" => Self::FinancialModel,
            "compliance_checklist" => Self::ComplianceChecklist,
            "weekly_journal" => Self::WeeklyJournal,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::CompanyName => "company_name",
            Self::ValueProposition => "value_proposition",
            Self::HypothesisTracker => "hypothesis_tracker",
            Self::ProblemSolutionFit => "problem_solution_fit",
            Self::CompetitiveLandscape => "competitive_landscape",
            Self::MvpDefinition => "mvp_definition",
            Self::PitchDeck => "pitch_deck",
            Self::FinancialModel => "financial_model",
            Self::ComplianceChecklist => "compliance_checklist",
            Self::WeeklyJournal => "weekly_journal",
            Self::Other(tag) => tag,
        }
    }

    /// Document title: the catalog title, or the humanised tag
    pub fn title(&self) -> String {
        match tool_info(self.as_tag()) {
            Some(info) => info.title.to_string(),
            None => humanize_key(self.as_tag()),
        }
    }

    pub fn has_bespoke_renderer(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether the export opens with the team's value-proposition sentence
    pub fn supports_value_proposition(&self) -> bool {
        matches!(
            self,
            Self::HypothesisTracker
                | Self::ProblemSolutionFit
                | Self::CompetitiveLandscape
                | Self::MvpDefinition
                | Self::PitchDeck
        )
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Renderer for an artifact type
pub fn resolve(artifact_type: &ArtifactType) -> Renderer {
    match artifact_type {
        ArtifactType::CompanyName => renderers::company_name::render,
        ArtifactType::ValueProposition => renderers::value_proposition::render,
        ArtifactType::HypothesisTracker => renderers::hypothesis_tracker::render,
        ArtifactType::ProblemSolutionFit => renderers::problem_solution_fit::render,
        ArtifactType::CompetitiveLandscape => renderers::competitive_landscape::render,
        ArtifactType::MvpDefinition => renderers::mvp_definition::render,
        ArtifactType::PitchDeck => renderers::pitch_deck::render,
        ArtifactType::FinancialModel => renderers::financial_model::render,
        ArtifactType::ComplianceChecklist => renderers::compliance_checklist::render,
        ArtifactType::WeeklyJournal => renderers::weekly_journal::render,
        ArtifactType::Other(_) => renderers::generic::render,
    }
}
