use serde_json::{Map, Value};
use std::io::{self, Write};

use super::tabular_field;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV write error: {}", e);
    }
}

/// Schedules and yearly breakdowns are written one record per row;
/// anything else as two-column field/value pairs.
pub fn write_csv<W: Write>(writer: W, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    match value {
        Value::Object(map) => {
            let result = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            if let Some((_, rows)) = tabular_field(result) {
                write_array_csv(&mut wtr, rows)?;
            } else if let Some(Value::Object(summary)) = result.get("summary") {
                write_fields_csv(&mut wtr, summary)?;
            } else {
                write_fields_csv(&mut wtr, result)?;
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr)?,
        _ => wtr.write_record([&format_csv_value(value)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_fields_csv<W: Write>(
    wtr: &mut csv::Writer<W>,
    map: &Map<String, Value>,
) -> Result<(), csv::Error> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        if val.is_object() || val.is_array() {
            continue;
        }
        wtr.write_record([key.as_str(), &format_csv_value(val)])?;
    }
    Ok(())
}

fn write_array_csv<W: Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> Result<(), csv::Error> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([&format_csv_value(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}

/// CSV keeps full precision; rounding is left to the spreadsheet.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
