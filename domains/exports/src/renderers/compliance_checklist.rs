//! Compliance checklist: South African registration and regulatory items
//!
//! Known items print in checklist order whether or not they were touched;
//! any extra keys the form stored follow in payload order.

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::format::humanize_key;
use crate::payload::{from_value, ComplianceChecklistPayload, ValueProposition};

/// Checklist keys and their display names, in checklist order
pub const CHECKLIST: [(&str, &str); 8] = [
    ("cipc_registration", "CIPC Registration"),
    ("sars_income_tax", "SARS Income Tax Registration"),
    ("vat_registration", "VAT Registration"),
    ("paye_uif", "PAYE and UIF Registration"),
    ("coida", "COIDA Registration"),
    ("bbbee_certificate", "B-BBEE Certificate"),
    ("popia_compliance", "POPIA Compliance"),
    ("business_bank_account", "Business Bank Account"),
];

pub fn render(data: &Value, _vp: Option<&ValueProposition>) -> Vec<Block> {
    let checklist: ComplianceChecklistPayload = from_value(data);

    let known = CHECKLIST
        .iter()
        .map(|(key, title)| (*key, (*title).to_string()));
    let extra = checklist
        .items
        .keys()
        .filter(|key| !CHECKLIST.iter().any(|(known, _)| *known == key.as_str()))
        .map(|key| (key.as_str(), humanize_key(key)));

    known
        .chain(extra)
        .fold(BlockBuilder::new(), |builder, (key, title)| {
            let item = checklist.item(key).unwrap_or_default();
            builder
                .subheading(title)
                .inline("Status", item.status.as_deref())
                .inline("Notes", item.notes.as_deref())
        })
        .build()
}
