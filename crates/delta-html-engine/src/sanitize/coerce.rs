//! Loose coercions applied to untrusted JSON attribute values.
//!
//! Editors send attribute values with inconsistent types (`"3"` vs `3`,
//! `1` vs `true`), so validators work on these coerced forms.

use serde_json::Value;

/// Truthiness as editors understand it: `null`, `false`, `0`, `NaN` and `""`
/// are falsy, everything else (including empty objects) is truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a scalar value. Composite values have no string form.
pub fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric form of a value: numbers, numeric strings and booleans.
pub fn number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!n.is_nan()).then_some(n)
}

/// Non-zero number truncated towards zero and capped at `max`.
///
/// Results below 1 are rejected, so the output is always in `1..=max`.
pub fn bounded_level(v: &Value, max: u8) -> Option<u8> {
    let n = number(v)?;
    if n == 0.0 {
        return None;
    }
    let n = n.trunc().min(f64::from(max));
    (n >= 1.0).then(|| n as u8)
}
