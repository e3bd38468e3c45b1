//! Conversion of domain models into plain key/value records.
//!
//! A record is a JSON object holding exactly the fields a model exposes to
//! callers. Sensitive fields (the password hash) never appear in one.

use serde_json::Value;

/// A model that can be flattened into a key/value record.
pub trait Record {
    /// Returns the model as a JSON object.
    fn to_record(&self) -> Value;
}

/// Serializes a slice of models into a JSON array of records.
pub fn to_records<R: Record>(items: &[R]) -> Value {
    Value::Array(items.iter().map(Record::to_record).collect())
}
