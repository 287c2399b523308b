use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_as_table(&serde_json::to_value(value)?, table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Arrays of objects become one row per element. An object whose only
/// list field is an array of objects (`{"scheduled": [...], "total": 2}`)
/// is rendered as that list; anything else becomes key/value rows.
fn render_as_table(value: &Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) => render_rows(items, options),
        Value::Object(map) => {
            let mut lists = map.values().filter_map(|v| v.as_array().filter(|a| all_objects(a)));
            if let (Some(list), None) = (lists.next(), lists.next()) {
                return render_rows(list, options);
            }
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            render_table(&["key", "value"], &rows, options)
        }
        scalar => render_table(&["value"], &[vec![value_to_cell(scalar)]], options),
    }
}

fn all_objects(items: &[Value]) -> bool {
    items.iter().all(Value::is_object)
}

fn render_rows(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !all_objects(items) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    // serde_json maps are sorted, so the union comes out alphabetical.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(|item| !item.is_object()) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(items) => format!("[{} items]", items.len()),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{TableOptions, render, render_as_table};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        count: u32,
    }

    #[test]
    fn json_render_is_pretty_json() {
        let out = render(&Example { id: "x", count: 7 }, OutputFormat::Json).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["count"], 7);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "x", count: 7 }, OutputFormat::Raw).expect("render");
        assert_eq!(out, r#"{"id":"x","count":7}"#);
    }

    #[test]
    fn object_renders_as_key_value_rows() {
        let out = render_as_table(&json!({"theme": "dark"}), PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("key"));
        assert!(lines[2].contains("theme") && lines[2].contains("dark"));
    }

    #[test]
    fn wrapped_list_renders_as_rows() {
        let value = json!({
            "scheduled": [
                {"handle": "outbox-1", "title": "ASS APP"},
                {"handle": "outbox-2", "title": "Assignment Reminder"},
            ],
            "total": 2,
        });
        let out = render_as_table(&value, PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("handle"));
        assert!(lines[3].contains("Assignment Reminder"));
    }

    #[test]
    fn nested_lists_collapse_to_cells() {
        let value = json!([
            {"id": "1", "times": ["20:00", "08:30"], "items": [{"id": 1}, {"id": 2}]},
        ]);
        let out = render_as_table(&value, PLAIN);
        assert!(out.contains("20:00, 08:30"));
        assert!(out.contains("[2 items]"));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_as_table(&json!([]), PLAIN), "(no rows)");
    }
}
