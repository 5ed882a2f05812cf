use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

// Form state arrives loosely typed: costs may be numbers, untouched inputs are
// empty strings, cleared ones are null. Everything collapses to trimmed text,
// and values a form would treat as unset (`""`, `0`, `false`, `null`) become None.
pub(crate) fn deserialize_form_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(form_text))
}

fn form_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(number_text(&n))
            }
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

// Whole floats print without a fractional part, so `45.0` reads as `45`
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Blocks and lists the form may send as `null`; null and missing both mean empty.
pub(crate) fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Store-assigned ids: any string or number, zero included.
pub(crate) fn deserialize_record_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// The field's text when it holds something other than whitespace.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// First non-blank candidate, in order.
pub fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates.iter().find_map(|candidate| present(candidate))
}
