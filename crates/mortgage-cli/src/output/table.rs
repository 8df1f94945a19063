use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{display_value, header_label};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                println!("{}", field_table(map));
            }
        }
        Value::Array(arr) => println!("{}", array_table(arr)),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    let Value::Object(res_map) = result else {
        println!("{}", field_table(envelope));
        return;
    };

    // Scalars first, then one table per nested section
    let scalars: Map<String, Value> = res_map
        .iter()
        .filter(|(_, v)| !v.is_object() && !v.is_array())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if !scalars.is_empty() {
        println!("{}", field_table(&scalars));
    }

    for (key, val) in res_map {
        match val {
            Value::Object(inner) => {
                println!("\n{}", header_label(key));
                println!("{}", field_table(inner));
            }
            Value::Array(arr) => {
                println!("\n{}", header_label(key));
                println!("{}", array_table(arr));
            }
            _ => {}
        }
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([header_label(key), display_value(key, val)]);
    }
    Table::from(builder)
}

/// Column order follows the first object's keys.
fn array_table(arr: &[Value]) -> String {
    let Some(Value::Object(first)) = arr.first() else {
        if arr.is_empty() {
            return "(empty)".to_string();
        }
        return arr
            .iter()
            .map(|v| display_value("", v))
            .collect::<Vec<_>>()
            .join("\n");
    };

    let keys: Vec<&String> = first.keys().collect();
    let mut builder = Builder::default();
    builder.push_record(keys.iter().map(|k| header_label(k)));

    for item in arr {
        if let Value::Object(map) = item {
            builder.push_record(keys.iter().map(|k| {
                map.get(k.as_str())
                    .map(|v| display_value(k, v))
                    .unwrap_or_default()
            }));
        }
    }

    Table::from(builder).to_string()
}
