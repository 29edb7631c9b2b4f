//! Total numeric coercions over raw field values.
//!
//! Resolved values are loosely typed: an LTV may arrive as `0.95`, `95`, or
//! `"95"`. Every conversion here returns `Option` so a parse failure is an
//! explicit case at the call site, never a silently swallowed default.

use serde_json::Value;

/// Numeric reading of a raw value: JSON numbers as-is, strings parsed.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Integer reading of a raw value. Fractional strings do not parse; JSON
/// floats truncate.
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Percent coercion: ratios with magnitude at most 1 are fractions-of-one
/// and scale by 100; larger magnitudes are read as already-scaled percents.
pub fn to_percent(value: &Value) -> Option<f64> {
    let number = as_f64(value)?;
    if number.abs() <= 1.0 {
        Some(number * 100.0)
    } else {
        Some(number)
    }
}
