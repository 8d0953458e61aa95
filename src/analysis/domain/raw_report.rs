//! Presence-checked access into loosely typed provider reports.
//!
//! Provider reports are heterogeneous JSON: any level may be missing, null,
//! or of an unexpected type. Instead of decoding into a rigid schema, the
//! aggregator walks the report with [`field`], which treats a key path as
//! present only when every step exists and holds a "truthy" value.

use serde_json::Value;

/// Looks up `path` inside `value`, returning the final value if every step
/// along the way is present
///
/// A step counts as absent when the key is missing, the parent is not an
/// object, or the value is `null`, `false`, numeric zero, or an empty string.
/// Empty arrays and objects count as present.
pub fn field<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
        if !is_truthy(current) {
            return None;
        }
    }
    Some(current)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
