use std::collections::{btree_map::Entry, BTreeMap};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A header or query value as it arrived: a single string, or every value in
/// arrival order when the name was repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(field: FieldValue) -> Self {
        match field {
            FieldValue::Single(value) => Value::String(value),
            FieldValue::Multiple(values) => {
                Value::Array(values.into_iter().map(Value::String).collect())
            }
        }
    }
}

pub type FieldMap = BTreeMap<String, FieldValue>;

/// Folds name/value pairs into a map, turning repeated names into lists.
pub fn collect_fields<I, K, V>(pairs: I) -> FieldMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut fields = FieldMap::new();
    for (name, value) in pairs {
        match fields.entry(name.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value.into()),
            Entry::Vacant(entry) => {
                entry.insert(FieldValue::Single(value.into()));
            }
        }
    }
    fields
}

/// One captured webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookRecord {
    pub timestamp: String,
    pub headers: FieldMap,
    pub body: Value,
    pub query: FieldMap,
}

impl WebhookRecord {
    /// Builds a record stamped with the current UTC time.
    pub fn capture(headers: FieldMap, body: Value, query: FieldMap) -> Self {
        Self {
            timestamp: now_timestamp(),
            headers,
            body,
            query,
        }
    }
}

/// Current UTC time as RFC 3339 with millisecond precision, e.g.
/// `2024-05-01T10:15:30.123Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
