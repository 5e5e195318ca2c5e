//! Value proposition: the pitch sentence built from the artifact's own fields
//!
//! Ignores the team-level value proposition; this artifact *is* it.

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::payload::{from_value, ValueProposition};

pub fn render(data: &Value, _team_vp: Option<&ValueProposition>) -> Vec<Block> {
    let vp: ValueProposition = from_value(data);

    let builder = BlockBuilder::new().subheading("Statement");
    let builder = if vp.is_empty() {
        builder.placeholder()
    } else {
        builder.body(vp.sentence())
    };

    builder
        .divider()
        .field("Solution", vp.solution.as_deref())
        .field("Customer", vp.customer.as_deref())
        .field("Benefit", vp.benefit.as_deref())
        .field("How it works", vp.how_it_works.as_deref())
        .field("Improvement over current options", vp.improvement.as_deref())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PLACEHOLDER;
    use serde_json::json;

    #[test]
    fn test_sentence_from_payload() {
        let blocks = render(
            &json!({
                "solution": "automated QC",
                "customer": "SME manufacturers",
                "benefit": "fewer defects",
                "how_it_works": "computer vision on the line",
                "improvement": "80% faster detection",
            }),
            None,
        );
        assert_eq!(
            blocks[1],
            Block::Body(
                "Our product automated QC helps SME manufacturers achieve fewer defects by \
                 computer vision on the line, an improvement of 80% faster detection over current options."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_team_value_proposition_ignored() {
        let team_vp = ValueProposition {
            solution: Some("Something else".to_string()),
            ..Default::default()
        };
        let data = json!({"solution": "Ledgerly"});
        assert_eq!(render(&data, Some(&team_vp)), render(&data, None));
    }

    #[test]
    fn test_empty_payload() {
        let blocks = render(&json!({}), None);
        assert_eq!(blocks[1], Block::Body(PLACEHOLDER.to_string()));
        assert_eq!(blocks.len(), 13);
        assert!(blocks
            .iter()
            .filter(|b| matches!(b, Block::Body(_)))
            .all(|b| b.text() == Some(PLACEHOLDER)));
    }
}
