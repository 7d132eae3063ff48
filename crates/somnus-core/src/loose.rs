//! Deserialization helpers for loosely-typed extraction output.
//!
//! The upstream extractor is free to emit `"23:00"`, `23`, `7.5` or `null`
//! for any survey field. Everything is kept as text; interpretation happens
//! later in the field normalizer.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Accept a JSON string, number, boolean or null and store it as text.
///
/// `null` becomes the empty string. Arrays and objects are rejected.
/// Numbers with no fractional part are written without one, so `2.0`
/// arrives as `"2"`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(number_text(&n)),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected text or number, got {other}"
        ))),
    }
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
