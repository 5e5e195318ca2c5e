//! Fallback for artifact types without a bespoke shape
//!
//! Dumps every non-blank top-level string field as a label and paragraph. Numbers,
//! arrays and nested objects are skipped.

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::format::label_from_key;
use crate::payload::ValueProposition;

pub fn render(data: &Value, _vp: Option<&ValueProposition>) -> Vec<Block> {
    let Some(fields) = data.as_object() else {
        return BlockBuilder::new().placeholder().build();
    };

    let builder = fields
        .iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) if !text.trim().is_empty() => Some((key, text)),
            _ => None,
        })
        .fold(BlockBuilder::new(), |builder, (key, text)| {
            builder.label(label_from_key(key)).body(text.as_str())
        });

    let blocks = builder.build();
    if blocks.is_empty() {
        return BlockBuilder::new().placeholder().build();
    }
    blocks
}
