//! Firestore REST value codec.
//!
//! Firestore wraps every field in a single-key object naming its type:
//!
//! ```text
//! { "clientName": { "stringValue": "Acme" },
//!   "totalBudget": { "integerValue": "1200" },
//!   "images": { "arrayValue": { "values": [ { "mapValue": { "fields": { .. } } } ] } } }
//! ```
//!
//! [`decode_fields`] flattens that into plain JSON so records can be read
//! with serde; [`encode_fields`] goes the other way for writes.

use serde_json::{Map, Number, Value};

use crate::error::{PortfolioError, PortfolioResult};

/// Convert a Firestore `fields` map into a plain JSON object.
pub fn decode_fields(fields: &Map<String, Value>) -> PortfolioResult<Map<String, Value>> {
    fields
        .iter()
        .map(|(name, value)| {
            decode_value(value)
                .map(|v| (name.clone(), v))
                .map_err(|e| PortfolioError::Decode(format!("field '{}': {}", name, e)))
        })
        .collect()
}

/// Convert one typed Firestore value into plain JSON.
pub fn decode_value(value: &Value) -> PortfolioResult<Value> {
    let object = value
        .as_object()
        .ok_or_else(|| PortfolioError::Decode("value is not an object".to_string()))?;
    let (kind, inner) = object
        .iter()
        .next()
        .ok_or_else(|| PortfolioError::Decode("empty value".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| PortfolioError::Decode("booleanValue is not a bool".to_string())),
        "integerValue" => decode_integer(inner),
        "doubleValue" => Ok(decode_double(inner)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| PortfolioError::Decode(format!("{} is not a string", kind))),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values
                    .iter()
                    .map(decode_value)
                    .collect::<PortfolioResult<Vec<_>>>()?,
                _ => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => {
            let fields = match inner.get("fields") {
                Some(Value::Object(fields)) => decode_fields(fields)?,
                _ => Map::new(),
            };
            Ok(Value::Object(fields))
        }
        other => Err(PortfolioError::Decode(format!("unknown value type '{}'", other))),
    }
}

// Integers travel as decimal strings to survive 64-bit precision.
fn decode_integer(inner: &Value) -> PortfolioResult<Value> {
    let parsed = match inner {
        Value::String(s) => s.parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed
        .map(|n| Value::Number(n.into()))
        .ok_or_else(|| PortfolioError::Decode(format!("bad integerValue {}", inner)))
}

// "NaN" and "Infinity" arrive as strings and have no JSON form.
fn decode_double(inner: &Value) -> Value {
    let parsed = match inner {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Convert a plain JSON object into a Firestore `fields` map.
///
/// String fields named in `timestamp_fields` are written as
/// `timestampValue` so the store can order on them.
pub fn encode_fields(object: &Map<String, Value>, timestamp_fields: &[&str]) -> Map<String, Value> {
    object
        .iter()
        .map(|(name, value)| {
            let encoded = match value {
                Value::String(s) if timestamp_fields.contains(&name.as_str()) => {
                    typed("timestampValue", Value::String(s.clone()))
                }
                other => encode_value(other),
            };
            (name.clone(), encoded)
        })
        .collect()
}

pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => typed("nullValue", Value::Null),
        Value::Bool(b) => typed("booleanValue", Value::Bool(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => typed("integerValue", Value::String(i.to_string())),
            None => typed("doubleValue", value.clone()),
        },
        Value::String(s) => typed("stringValue", Value::String(s.clone())),
        Value::Array(values) => {
            let values: Vec<Value> = values.iter().map(encode_value).collect();
            let mut inner = Map::new();
            inner.insert("values".to_string(), Value::Array(values));
            typed("arrayValue", Value::Object(inner))
        }
        Value::Object(fields) => {
            let mut inner = Map::new();
            inner.insert(
                "fields".to_string(),
                Value::Object(encode_fields(fields, &[])),
            );
            typed("mapValue", Value::Object(inner))
        }
    }
}

fn typed(kind: &str, inner: Value) -> Value {
    let mut object = Map::new();
    object.insert(kind.to_string(), inner);
    Value::Object(object)
}
