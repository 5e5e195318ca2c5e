//! Problem-solution fit: the problem, who has it, and the evidence the
//! solution addresses it

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::payload::{from_value, ProblemSolutionFitPayload, ValueProposition};

pub fn render(data: &Value, vp: Option<&ValueProposition>) -> Vec<Block> {
    let payload: ProblemSolutionFitPayload = from_value(data);

    BlockBuilder::new()
        .value_proposition(vp)
        .subheading("Problem")
        .field("Problem statement", payload.problem.as_deref())
        .field("Customer segment", payload.customer_segment.as_deref())
        .field("Current alternatives", payload.current_alternatives.as_deref())
        .subheading("Solution")
        .field("Proposed solution", payload.solution.as_deref())
        .field("Evidence of fit", payload.evidence.as_deref())
        .inline("Fit score", payload.fit_score.as_deref())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_section_order() {
        let blocks = render(&json!({"problem": "Cash-flow gaps", "fit_score": 7}), None);
        assert_eq!(blocks[0], Block::Heading2("Problem".to_string()));
        assert_eq!(blocks[2], Block::Body("Cash-flow gaps".to_string()));
        assert_eq!(blocks.last().and_then(Block::text), Some("Fit score: 7"));
    }

    #[test]
    fn test_value_proposition_prepended() {
        let vp = ValueProposition {
            customer: Some("township retailers".to_string()),
            ..Default::default()
        };
        let with = render(&json!({}), Some(&vp));
        let without = render(&json!({}), None);
        assert_eq!(with.len(), without.len() + 3);
        assert!(with[1].text().unwrap().contains("helps township retailers"));
        assert_eq!(&with[3..], &without[..]);
    }
}
