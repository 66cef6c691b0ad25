use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

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
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let value = serde_json::to_value(value)?;
    match value {
        Value::Object(map) => Ok(render_object(&map, options)),
        Value::Array(items) => Ok(render_generic_list(&items, options)),
        scalar => Ok(table::compact(&scalar)),
    }
}

/// Listing responses wrap their rows under a known key; everything else
/// in the wrapper becomes a trailing summary line.
fn render_object(map: &Map<String, Value>, options: table::TableOptions) -> String {
    for (key, columns) in [
        ("rows", table::CASE_COLUMNS),
        ("cases", table::MY_CASE_COLUMNS),
        ("notifications", table::NOTIFICATION_COLUMNS),
        ("status_counts", table::STATUS_COUNT_COLUMNS),
    ] {
        if let Some(Value::Array(items)) = map.get(key) {
            let rows: Vec<&Map<String, Value>> =
                items.iter().filter_map(Value::as_object).collect();
            return with_summary(table::render_rows(columns, &rows, options), map, key);
        }
    }

    if let Some(Value::Object(filters)) = map.get("filters") {
        return with_summary(render_saved_filters(filters, options), map, "filters");
    }

    let entries: Vec<(String, String)> = map
        .iter()
        .map(|(key, value)| (key.clone(), entity_cell(key, value)))
        .collect();
    table::render_entity(&entries, options)
}

/// Saved filters arrive keyed by name; flatten into name/criteria/updated
/// rows with the criteria condensed to one line.
fn render_saved_filters(filters: &Map<String, Value>, options: table::TableOptions) -> String {
    let rows: Vec<Map<String, Value>> = filters
        .iter()
        .map(|(name, record)| {
            let mut row = Map::new();
            row.insert("name".to_string(), Value::String(name.clone()));
            row.insert(
                "criteria".to_string(),
                Value::String(
                    record
                        .get("criteria")
                        .and_then(Value::as_object)
                        .map_or_else(|| "(match all)".to_string(), summarize_criteria),
                ),
            );
            row.insert(
                "updated_at".to_string(),
                record.get("updated_at").cloned().unwrap_or(Value::Null),
            );
            row
        })
        .collect();
    let row_refs: Vec<&Map<String, Value>> = rows.iter().collect();
    table::render_rows(table::SAVED_FILTER_COLUMNS, &row_refs, options)
}

/// Condense filter criteria to the console's one-line chip form, e.g.
/// `status=Submitted score>=70 search='smith'`.
pub(crate) fn summarize_criteria(criteria: &Map<String, Value>) -> String {
    let mut parts = Vec::new();

    if let Some(Value::Array(statuses)) = criteria.get("status") {
        let labels: Vec<String> = statuses.iter().map(table::compact).collect();
        if !labels.is_empty() {
            parts.push(format!("status={}", labels.join(",")));
        }
    }
    for (key, prefix) in [
        ("min_ai_score", "score>="),
        ("max_ai_score", "score<="),
        ("min_income_potential", "amount>="),
        ("max_income_potential", "amount<="),
        ("start_date", "created>="),
        ("end_date", "updated<="),
    ] {
        if let Some(value) = criteria.get(key) {
            if !value.is_null() {
                parts.push(format!("{prefix}{}", table::compact(value)));
            }
        }
    }
    if let Some(Value::String(query)) = criteria.get("search_query") {
        parts.push(format!("search='{query}'"));
    }

    if parts.is_empty() {
        "(match all)".to_string()
    } else {
        parts.join(" ")
    }
}

fn with_summary(body: String, map: &Map<String, Value>, list_key: &str) -> String {
    let parts: Vec<String> = map
        .iter()
        .filter(|(key, _)| *key != list_key)
        .map(|(key, value)| format!("{key}: {}", table::compact(value)))
        .collect();
    if parts.is_empty() {
        body
    } else {
        format!("{body}\n\n{}", parts.join("  "))
    }
}

fn entity_cell(key: &str, value: &Value) -> String {
    match value {
        Value::Object(map) if key == "criteria" => summarize_criteria(map),
        Value::Null => "-".to_string(),
        other => table::compact(other),
    }
}

/// Bare arrays have no declared view; columns are the sorted union of keys.
fn render_generic_list(items: &[Value], options: table::TableOptions) -> String {
    if !items.iter().all(Value::is_object) {
        let cells: Vec<Vec<String>> = items.iter().map(|item| vec![table::compact(item)]).collect();
        return table::render_generic(&["value"], &cells, options);
    }

    let mut keys = Vec::<String>::new();
    for item in items.iter().filter_map(Value::as_object) {
        for key in item.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys.sort();

    let headers: Vec<&str> = keys.iter().map(String::as_str).collect();
    let cells: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|item| {
            keys.iter()
                .map(|key| item.get(key).map_or_else(|| "-".to_string(), table::compact))
                .collect()
        })
        .collect();
    table::render_generic(&headers, &cells, options)
}
