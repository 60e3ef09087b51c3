//! The contract every remote entity type implements.

use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A persisted domain record reachable through `api/<RESOURCE>`.
pub trait Entity:
    Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Path segment under `api/` (e.g. `items`).
    const RESOURCE: &'static str;

    /// Server-assigned id, absent until persisted.
    fn id(&self) -> Option<i32>;

    /// Body sent to the collaborator with empty fields omitted.
    fn clean(&self) -> Payload;

    /// Value of `field` used for client-side sorting.
    ///
    /// `None` for null values and for field names the entity doesn't have.
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

/// JSON request body built field by field.
///
/// Each builder method states the omission rule for its kind of field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Omitted when absent.
    pub fn id(mut self, id: Option<i32>) -> Self {
        if let Some(id) = id {
            self.fields.insert("id".to_string(), Value::from(id));
        }
        self
    }

    /// Omitted when absent or empty.
    pub fn text(mut self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => {
                self.fields
                    .insert(key.to_string(), Value::String(value.to_string()));
            }
            _ => {}
        }
        self
    }

    /// Omitted when absent. Serialized as RFC 3339 with a `Z` suffix.
    pub fn timestamp(mut self, key: &str, value: Option<&DateTime<Utc>>) -> Self {
        if let Some(value) = value {
            self.fields.insert(
                key.to_string(),
                Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            );
        }
        self
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.fields)
    }
}

/// A comparable field value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SortValue {
    /// Orders two optional values; null sorts before any value.
    pub fn compare(a: Option<&SortValue>, b: Option<&SortValue>) -> Ordering {
        a.cmp(&b)
    }
}
