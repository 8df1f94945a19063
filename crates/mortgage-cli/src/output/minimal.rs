use serde_json::Value;

use super::display_value;

/// Key figures in priority order.
const PRIORITY_KEYS: &[&str] = &["monthly_payment", "total_interest", "total_paid"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

/// Looks in the result object, then in a nested `summary`, then falls back
/// to the first field.
pub fn minimal_line(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Value::Object(map) = result_obj else {
        return display_value("", result_obj);
    };

    let nested = map.get("summary").and_then(|s| s.as_object());
    for key in PRIORITY_KEYS {
        let hit = map
            .get(*key)
            .or_else(|| nested.and_then(|s| s.get(*key)))
            .filter(|v| !v.is_null());
        if let Some(val) = hit {
            return display_value(key, val);
        }
    }

    match map.iter().next() {
        Some((key, val)) => format!("{}: {}", key, display_value(key, val)),
        None => String::new(),
    }
}
