//! Hypothesis tracker: one section per hypothesis with its test and outcome

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::payload::{from_value, HypothesisTrackerPayload, ValueProposition};

pub fn render(data: &Value, vp: Option<&ValueProposition>) -> Vec<Block> {
    let payload: HypothesisTrackerPayload = from_value(data);

    let mut builder = BlockBuilder::new().value_proposition(vp);

    if payload.hypotheses.is_empty() {
        return builder.subheading("Hypotheses").placeholder().build();
    }

    for (i, h) in payload.hypotheses.iter().enumerate() {
        builder = builder
            .subheading(format!("Hypothesis {}", i + 1))
            .field("We believe", h.hypothesis.as_deref())
            .inline("Category", h.category.as_deref())
            .field("How we will test it", h.test_method.as_deref())
            .field("Success criteria", h.success_criteria.as_deref())
            .field("Result", h.result.as_deref())
            .inline("Status", h.status.as_deref());
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hypotheses_rendered_in_order() {
        let blocks = render(
            &json!({"hypotheses": [
                {"hypothesis": "Spaza owners will pay R99/month", "status": "validated"},
                {"statement": "Delivery within 24h matters", "test_method": "Interviews"},
            ]}),
            None,
        );
        let texts: Vec<_> = blocks.iter().filter_map(Block::text).collect();
        let first = texts.iter().position(|t| *t == "Hypothesis 1").unwrap();
        let second = texts.iter().position(|t| *t == "Hypothesis 2").unwrap();
        assert!(first < second);
        assert!(texts.contains(&"Spaza owners will pay R99/month"));
        assert!(texts.contains(&"Delivery within 24h matters"));
        assert!(texts.contains(&"Status: validated"));
        assert!(texts.contains(&"Interviews"));
    }

    #[test]
    fn test_empty_payload_with_value_proposition() {
        let vp = ValueProposition::default();
        let blocks = render(&json!({}), Some(&vp));
        assert_eq!(blocks[0], Block::Label("Value Proposition".to_string()));
        assert_eq!(blocks[2], Block::Divider);
        assert_eq!(blocks.last().and_then(Block::text), Some("—"));
    }
}
