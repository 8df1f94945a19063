pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::OutputFormat;

/// Fields printed at full precision; everything else decimal is money.
const RATE_FIELDS: &[&str] = &["monthly_rate", "interest_share", "annual_rate_percent"];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a field for humans: money rounded to cents, rates untouched.
///
/// Rounding happens here only; the computed values keep full precision.
pub fn display_value(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) if !RATE_FIELDS.contains(&key) => {
                let cents = d.round_dp(2);
                if cents.is_zero() {
                    format!("{:.2}", Decimal::ZERO)
                } else {
                    format!("{:.2}", cents)
                }
            }
            Ok(d) => d.normalize().to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(|v| display_value(key, v)).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Column labels that differ from the title-cased field name.
const LABEL_OVERRIDES: &[(&str, &str)] = &[
    ("principal_portion", "Principal"),
    ("interest_portion", "Interest"),
];

/// `remaining_balance` -> `Remaining Balance`
pub fn header_label(key: &str) -> String {
    if let Some((_, label)) = LABEL_OVERRIDES.iter().find(|(field, _)| *field == key) {
        return (*label).to_string();
    }
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// First array-of-objects field in a result object (schedule rows, yearly totals).
pub fn tabular_field(result: &serde_json::Map<String, Value>) -> Option<(&str, &[Value])> {
    result.iter().find_map(|(key, val)| match val {
        Value::Array(arr) if matches!(arr.first(), Some(Value::Object(_))) => {
            Some((key.as_str(), arr.as_slice()))
        }
        _ => None,
    })
}
