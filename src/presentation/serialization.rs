/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Deserializes an optional integer that may arrive as a number, a float or a string
///
/// Floats are truncated toward zero. `null`, empty strings and anything that is
/// not numeric become `None`.
pub fn lenient_i64_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

/// Deserializes an optional number, keeping fractional values exactly
///
/// Numeric strings are parsed; `null`, empty strings and anything that is not
/// numeric become `None`.
pub fn lenient_number_opt<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => Some(n),
        Some(Value::String(s)) => s.trim().parse::<Number>().ok(),
        _ => None,
    })
}

/// Deserializes an optional string; numbers and booleans are stringified
pub fn lenient_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Deserializes a list of arbitrary values
///
/// `null` gives an empty list and a lone non-array value a one-element list.
pub fn lenient_value_vec<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Deserializes a present field as `Some`, even when it is `null`
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

/// Converts epoch seconds to a UTC timestamp
///
/// Zero and out-of-range values map to `None`; the API uses 0 for "unknown".
#[must_use]
pub fn epoch_to_datetime(epoch_seconds: Option<i64>) -> Option<DateTime<Utc>> {
    epoch_seconds
        .filter(|&secs| secs != 0)
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
}
