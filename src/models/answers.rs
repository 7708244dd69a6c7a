use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw questionnaire answers, one per recommendation request
///
/// Values are kept exactly as the shopper's client sent them. Interpreting
/// them (bands, sentinels like "any") is the normalizer's job. In the list
/// answers a `None` entry stands for a non-string value: it still counts as
/// one requested entry but never matches anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answers {
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub capacity: Option<String>,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub space: Option<String>,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub style: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub color: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub lifestyle: Vec<Option<String>>,
}

/// Largest magnitude a whole float is still keyed in plain digits
const PLAIN_DIGITS_LIMIT: f64 = 1e21;

/// Renders a JSON value the way a band lookup key would see it
///
/// Whole floats key like integers, so `2.0` looks up `"2"`.
fn value_to_key(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => {
            if let Some(whole) = n.as_i64() {
                return Some(whole.to_string());
            }
            if let Some(whole) = n.as_u64() {
                return Some(whole.to_string());
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < PLAIN_DIGITS_LIMIT => {
                    Some(format!("{}", f as i64))
                }
                _ => Some(n.to_string()),
            }
        }
        other => Some(other.to_string()),
    }
}

/// Accepts a string, number, or null for single-choice answers
fn lenient_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_key(value))
}

/// Only strings can ever equal a tag
fn list_entry(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Accepts an array, a bare scalar, or null for multi-choice answers
///
/// Order and duplicates are preserved. A top-level null means no entries.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(values) => values.into_iter().map(list_entry).collect(),
        scalar => vec![list_entry(scalar)],
    })
}

impl Answers {
    /// Answers with nothing filled in
    pub fn new() -> Self {
        Self::default()
    }
}
