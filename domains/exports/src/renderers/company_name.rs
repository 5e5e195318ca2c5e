//! Company name checker: shortlisted names and their availability checks

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::format::or_placeholder;
use crate::payload::{from_value, CompanyNamePayload, ValueProposition};

pub fn render(data: &Value, _vp: Option<&ValueProposition>) -> Vec<Block> {
    let payload: CompanyNamePayload = from_value(data);

    let mut builder = BlockBuilder::new()
        .field("Chosen name", payload.chosen_name.as_deref())
        .field("Rationale", payload.rationale.as_deref())
        .divider()
        .subheading("Candidates");

    if payload.candidates.is_empty() {
        return builder.placeholder().build();
    }

    for (i, candidate) in payload.candidates.iter().enumerate() {
        builder = builder
            .subheading(format!(
                "{}. {}",
                i + 1,
                or_placeholder(candidate.name.as_deref())
            ))
            .inline("CIPC", candidate.cipc_status.as_deref())
            .inline("Domain", candidate.domain_status.as_deref())
            .inline("Trademark", candidate.trademark_status.as_deref())
            .inline("Notes", candidate.notes.as_deref());
    }

    builder.build()
}
