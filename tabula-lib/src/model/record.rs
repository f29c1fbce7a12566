//! Record trait and a map-backed record

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// A row of tabular data that can be sorted by named field.
///
/// The controller never looks at record semantics beyond this accessor.
/// A field the record does not have reads as [`Value::Null`].
///
/// # Example
///
/// ```
/// use tabula_lib::model::{Record, Value};
///
/// struct Bundle {
///     name: String,
///     price: f64,
/// }
///
/// impl Record for Bundle {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(self.name.as_str().into()),
///             "price" => Some(self.price.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of the named field, if the record has it.
    fn field(&self, name: &str) -> Option<Value>;

    /// Returns the value of the named field, or `Null` if missing.
    fn field_or_null(&self, name: &str) -> Value {
        self.field(name).unwrap_or_default()
    }
}

/// A record whose fields are held in a map.
///
/// Useful when rows arrive as loosely-typed JSON objects.
///
/// # Example
///
/// ```
/// use tabula_lib::model::{DynamicRecord, Record, Value};
///
/// let record = DynamicRecord::new()
///     .set("id", 1i64)
///     .set("status", "Active");
///
/// assert_eq!(record.field("status"), Some(Value::from("Active")));
/// assert_eq!(record.field("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicRecord {
    fields: BTreeMap<String, Value>,
}

impl DynamicRecord {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

impl Record for DynamicRecord {
    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}
