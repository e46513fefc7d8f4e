//! Printing command responses as pretty JSON, an aligned text table, or
//! single-line JSON.

use jot_core::responses::BoardResponse;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod board;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print a board. Tables get item rows plus the counter footer instead of
/// the generic key/value layout.
pub fn output_board(board: &BoardResponse, format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(board, format);
    }
    println!("{}", board::render_board(board, table_options()));
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Arrays of objects become one row per element, a single object becomes
/// key/value rows, anything else a one-column table.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let (headers, rows) = match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        Value::Array(items) if items.iter().all(Value::is_object) => object_rows(&items),
        Value::Array(items) => (
            vec![String::from("value")],
            items.iter().map(|item| vec![cell(item)]).collect(),
        ),
        Value::Object(map) => (
            vec![String::from("key"), String::from("value")],
            map.iter().map(|(key, value)| vec![key.clone(), cell(value)]).collect(),
        ),
        scalar => (vec![String::from("value")], vec![vec![cell(&scalar)]]),
    };

    let headers = headers.iter().map(String::as_str).collect::<Vec<_>>();
    Ok(table::render_entity_table(&headers, &rows, table_options()))
}

/// Union of keys across all objects, in first-seen order.
fn object_rows(items: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let objects = items.iter().filter_map(Value::as_object).collect::<Vec<_>>();

    let mut headers = Vec::<String>::new();
    for key in objects.iter().flat_map(|map| map.keys()) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    let rows = objects
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();
    (headers, rows)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Array(values) if values.iter().all(Value::is_string) => values
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jot_core::entities::Item;

    use super::*;

    fn item() -> Item {
        Item::new("itm-0123456789abcdef", "Buy milk", Utc::now()).unwrap()
    }

    #[test]
    fn json_is_pretty_and_raw_is_one_line() {
        let pretty = render(&item(), OutputFormat::Json).unwrap();
        let raw = render(&item(), OutputFormat::Raw).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!raw.contains('\n'));

        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["text"], "Buy milk");
        assert_eq!(parsed["completed"], false);
    }

    #[test]
    fn single_item_renders_as_key_value_rows() {
        let out = render(&item(), OutputFormat::Table).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().is_some_and(|header| header.starts_with("key")));
        assert!(out.lines().any(|line| line.starts_with("text") && line.contains("Buy milk")));
        assert!(out.lines().any(|line| line.starts_with("notes") && line.trim_end().ends_with('-')));
    }

    #[test]
    fn preset_catalog_renders_one_row_per_preset() {
        let out = render(&jot_core::presets::PRESETS, OutputFormat::Table).unwrap();
        assert_eq!(out.lines().count(), jot_core::presets::PRESETS.len() + 2);
        assert!(out.contains("early-riser"));
        assert!(out.contains("; "));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let out = render(&Vec::<Item>::new(), OutputFormat::Table).unwrap();
        assert_eq!(out, "(no rows)");
    }
}
