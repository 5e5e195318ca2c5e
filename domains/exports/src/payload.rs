//! Typed views over the free-form artifact payloads
//!
//! Artifact `data` is stored as whatever the form saved; nothing validates it
//! against the artifact type. Each record here declares the shape one
//! renderer expects, and coercion is best-effort: wrong-shaped fields become
//! `None` or empty lists instead of errors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::or_placeholder;

/// Coerce a payload into `T`, falling back to `T::default()`.
///
/// Never fails. Non-object payloads always produce the default.
pub fn from_value<T: DeserializeOwned + Default>(value: &Value) -> T {
    if !value.is_object() {
        return T::default();
    }
    T::deserialize(value).unwrap_or_default()
}

/// Field-level `deserialize_with` helpers used by every payload record.
pub(crate) mod lenient {
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::{Map, Value};

    use crate::format::parse_number;

    /// Keys checked, in order, when a list item is an object rather than text
    const ITEM_TEXT_KEYS: &[&str] = &["feature", "name", "title", "text", "description"];

    pub(crate) fn coerce_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(true) => Some("Yes".to_string()),
            Value::Bool(false) => Some("No".to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_text(&value))
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(parse_number(&value))
    }

    /// List of records; non-object items are dropped.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .iter()
                .filter(|item| item.is_object())
                .map(super::from_value)
                .collect(),
            _ => Vec::new(),
        })
    }

    /// List of text items. Objects contribute their first descriptive field.
    pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let items = match value {
            Value::Array(items) => items,
            // A single textarea saved as one string: one item per line
            Value::String(s) => s.lines().map(|line| Value::String(line.to_string())).collect(),
            _ => Vec::new(),
        };

        Ok(items
            .iter()
            .filter_map(|item| match item {
                Value::Object(fields) => ITEM_TEXT_KEYS
                    .iter()
                    .find_map(|key| fields.get(*key).and_then(coerce_text)),
                other => coerce_text(other),
            })
            .map(|s| s.trim().to_string())
            .collect())
    }

    pub fn object<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

/// Team-level value proposition, joined in by several exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueProposition {
    #[serde(deserialize_with = "lenient::text")]
    pub solution: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub customer: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub benefit: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub how_it_works: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub improvement: Option<String>,
}

impl ValueProposition {
    /// The one-sentence pitch; missing parts render as the placeholder.
    pub fn sentence(&self) -> String {
        format!(
            "Our product {} helps {} achieve {} by {}, an improvement of {} over current options.",
            or_placeholder(self.solution.as_deref()),
            or_placeholder(self.customer.as_deref()),
            or_placeholder(self.benefit.as_deref()),
            or_placeholder(self.how_it_works.as_deref()),
            or_placeholder(self.improvement.as_deref()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.solution.is_none()
            && self.customer.is_none()
            && self.benefit.is_none()
            && self.how_it_works.is_none()
            && self.improvement.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NameCandidate {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cipc_status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub domain_status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub trademark_status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyNamePayload {
    #[serde(alias = "names", deserialize_with = "lenient::list")]
    pub candidates: Vec<NameCandidate>,
    #[serde(deserialize_with = "lenient::text")]
    pub chosen_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hypothesis {
    #[serde(alias = "statement", deserialize_with = "lenient::text")]
    pub hypothesis: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub test_method: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub success_criteria: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub result: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HypothesisTrackerPayload {
    #[serde(deserialize_with = "lenient::list")]
    pub hypotheses: Vec<Hypothesis>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProblemSolutionFitPayload {
    #[serde(deserialize_with = "lenient::text")]
    pub problem: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub customer_segment: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub current_alternatives: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub solution: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub evidence: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub fit_score: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Competitor {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub offering: Option<String>,
    #[serde(alias = "price", deserialize_with = "lenient::text")]
    pub pricing: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub strengths: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub weaknesses: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompetitiveLandscapePayload {
    #[serde(deserialize_with = "lenient::list")]
    pub competitors: Vec<Competitor>,
    #[serde(deserialize_with = "lenient::text")]
    pub differentiation: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub positioning: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MvpDefinitionPayload {
    #[serde(deserialize_with = "lenient::text")]
    pub core_problem: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub target_user: Option<String>,
    #[serde(alias = "must_have_features", deserialize_with = "lenient::text_list")]
    pub must_have: Vec<String>,
    #[serde(alias = "nice_to_have_features", deserialize_with = "lenient::text_list")]
    pub nice_to_have: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub out_of_scope: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub success_metrics: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub launch_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PitchDeckPayload {
    #[serde(deserialize_with = "lenient::text")]
    pub problem: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub solution: Option<String>,
    #[serde(alias = "target_market", deserialize_with = "lenient::text")]
    pub market: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub product: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub business_model: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub traction: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub competition: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub team: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub financials: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub ask: Option<String>,
}

/// Time-bucket columns of the financial tables, in display order.
pub const FINANCIAL_BUCKETS: [(&str, &str); 4] = [
    ("month1", "Month 1"),
    ("month3", "Month 3"),
    ("month6", "Month 6"),
    ("month12", "Month 12"),
];

/// One row of the revenue or cost table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub month1: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub month3: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub month6: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub month12: Option<f64>,
}

impl LineItem {
    /// Amount in one of the [`FINANCIAL_BUCKETS`] columns
    pub fn amount(&self, bucket: &str) -> Option<f64> {
        match bucket {
            "month1" => self.month1,
            "month3" => self.month3,
            "month6" => self.month6,
            "month12" => self.month12,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FinancialModelPayload {
    #[serde(deserialize_with = "lenient::list")]
    pub revenue_streams: Vec<LineItem>,
    #[serde(alias = "expenses", deserialize_with = "lenient::list")]
    pub costs: Vec<LineItem>,
    #[serde(alias = "funding_required", deserialize_with = "lenient::number")]
    pub investment_amount: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub pre_money_valuation: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub break_even_month: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub assumptions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComplianceItem {
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComplianceChecklistPayload {
    #[serde(deserialize_with = "lenient::object")]
    pub items: Map<String, Value>,
}

impl ComplianceChecklistPayload {
    /// Item by checklist key; absent or malformed entries are `None`.
    pub fn item(&self, key: &str) -> Option<ComplianceItem> {
        self.items
            .get(key)
            .filter(|v| v.is_object())
            .map(from_value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JournalEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub week: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub wins: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub challenges: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub lessons: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub next_steps: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub mood: Option<String>,
}

impl JournalEntry {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeeklyJournalPayload {
    #[serde(deserialize_with = "lenient::list")]
    pub entries: Vec<JournalEntry>,
}

impl WeeklyJournalPayload {
    /// Entries to render. A journal saved flat (one week, no `entries`
    /// array) is read as a single entry.
    pub fn from_data(data: &Value) -> Self {
        let mut payload: Self = from_value(data);
        if payload.entries.is_empty() {
            let single: JournalEntry = from_value(data);
            if !single.is_empty() {
                payload.entries.push(single);
            }
        }
        payload
    }
}

/// Sum one bucket column across line items, non-numeric counted as zero.
pub fn column_total(items: &[LineItem], bucket: &str) -> f64 {
    items
        .iter()
        .map(|item| item.amount(bucket).unwrap_or(0.0))
        .sum()
}
