//! Common value tree shared by all formats.
//!
//! JSON and YAML deserialize straight into [`Value`]. TOML goes through its own
//! tree first so datetimes can be rendered as strings instead of the marker
//! tables `toml` uses when serializing them.

pub use serde_json::{Map, Value};

/// A parsed config: string keys mapped to arbitrary values.
pub type Config = Map<String, Value>;

/// Convert a TOML table into the common mapping.
pub fn from_toml_table(table: toml::Table) -> Config {
    table
        .into_iter()
        .map(|(key, value)| (key, from_toml(value)))
        .collect()
}

/// Convert a single TOML value into the common value tree.
///
/// Non-finite floats (`inf`, `nan`) have no JSON representation and become null.
pub fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => Value::Object(from_toml_table(table)),
    }
}

/// Name of the JSON type of `value`, for diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
