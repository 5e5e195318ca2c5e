//! Number, currency and label formatting shared by the renderers

use serde_json::Value;

/// Rendered in place of any missing or unusable value
pub const PLACEHOLDER: &str = "—";

/// Words that stay upper-case when a key is humanised
const ACRONYMS: &[&str] = &[
    "cipc", "sars", "vat", "paye", "uif", "coida", "popia", "mvp", "okr", "gtm", "b-bbee",
    "bbbee",
];

/// Parse a payload value as a number.
///
/// Accepts JSON numbers and numeric strings. Strings may carry thousands
/// separators (commas, spaces, no-break spaces) and a leading `R`.
/// Anything else, including non-finite results, is `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

fn parse_numeric_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unprefixed = trimmed
        .strip_prefix('R')
        .map(str::trim_start)
        .unwrap_or(trimmed);

    let cleaned: String = unprefixed
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok()
}

/// Format an amount as South African Rand: `R 15 000`.
///
/// Rounded to whole rand, grouped in threes with spaces. `None` renders the
/// placeholder dash.
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return PLACEHOLDER.to_string();
    };

    let rounded = amount.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));

    if rounded < 0.0 {
        format!("-R {grouped}")
    } else {
        format!("R {grouped}")
    }
}

/// Insert a space between every group of three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }

    out
}

/// Format a fraction-of-100 value with one decimal: `20.0%`
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Text or the placeholder dash
pub fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

/// Plain label for an arbitrary payload key: underscores become spaces.
pub fn label_from_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Title-cased label for a known checklist or catalog key.
///
/// `cipc_registration` → `CIPC Registration`
pub fn humanize_key(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            if ACRONYMS.contains(&word.to_ascii_lowercase().as_str()) {
                word.to_ascii_uppercase()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
