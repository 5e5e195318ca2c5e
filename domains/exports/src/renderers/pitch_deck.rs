//! Pitch deck: ten slides, always in the same order

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::payload::{from_value, PitchDeckPayload, ValueProposition};

/// Slide titles in deck order
pub const SLIDES: [&str; 10] = [
    "Problem",
    "Solution",
    "Target Market",
    "Product",
    "Business Model",
    "Traction",
    "Competition",
    "Team",
    "Financials",
    "The Ask",
];

pub fn render(data: &Value, vp: Option<&ValueProposition>) -> Vec<Block> {
    // Older saves nest the slide text under `slides`
    let source = data
        .get("slides")
        .filter(|slides| slides.is_object())
        .unwrap_or(data);
    let deck: PitchDeckPayload = from_value(source);

    let contents = [
        &deck.problem,
        &deck.solution,
        &deck.market,
        &deck.product,
        &deck.business_model,
        &deck.traction,
        &deck.competition,
        &deck.team,
        &deck.financials,
        &deck.ask,
    ];

    SLIDES
        .iter()
        .zip(contents)
        .enumerate()
        .fold(
            BlockBuilder::new().value_proposition(vp),
            |builder, (i, (title, content))| {
                builder
                    .subheading(format!("Slide {}: {}", i + 1, title))
                    .field(title, content.as_deref())
            },
        )
        .build()
}
