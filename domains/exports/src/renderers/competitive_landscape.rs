//! Competitive landscape: competitor matrix plus positioning notes

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder, TableBlock};
use crate::format::or_placeholder;
use crate::payload::{from_value, CompetitiveLandscapePayload, Competitor, ValueProposition};

const MATRIX_HEADER: [&str; 5] = ["Competitor", "Offering", "Pricing", "Strengths", "Weaknesses"];

pub fn render(data: &Value, vp: Option<&ValueProposition>) -> Vec<Block> {
    let payload: CompetitiveLandscapePayload = from_value(data);

    let builder = BlockBuilder::new()
        .value_proposition(vp)
        .subheading("Competitor Matrix");

    let builder = if payload.competitors.is_empty() {
        builder.placeholder()
    } else {
        builder.table(matrix(&payload.competitors))
    };

    builder
        .field("Our differentiation", payload.differentiation.as_deref())
        .field("Market positioning", payload.positioning.as_deref())
        .build()
}

fn matrix(competitors: &[Competitor]) -> TableBlock {
    competitors
        .iter()
        .fold(TableBlock::new(MATRIX_HEADER), |table, c| {
            table.row(
                [
                    c.name.as_deref(),
                    c.offering.as_deref(),
                    c.pricing.as_deref(),
                    c.strengths.as_deref(),
                    c.weaknesses.as_deref(),
                ]
                .into_iter()
                .map(|cell| or_placeholder(cell).to_string())
                .collect(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table_of(blocks: &[Block]) -> &TableBlock {
        blocks
            .iter()
            .find_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .expect("matrix table")
    }

    #[test]
    fn test_one_row_per_competitor() {
        let blocks = render(
            &json!({"competitors": [
                {"name": "Yoco", "pricing": "2.95%", "strengths": "Brand"},
                {"name": "SnapScan", "offering": "QR payments"},
            ]}),
            None,
        );
        let table = table_of(&blocks);
        assert_eq!(table.header, MATRIX_HEADER);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Yoco", "—", "2.95%", "Brand", "—"]);
        assert_eq!(table.rows[1][1], "QR payments");
        assert!(table.total.is_none());
    }

    #[test]
    fn test_empty_matrix_is_placeholder() {
        let blocks = render(&json!({"competitors": "none yet"}), None);
        assert!(!blocks.iter().any(|b| matches!(b, Block::Table(_))));
        assert_eq!(blocks[1], Block::Body("—".to_string()));
    }
}
