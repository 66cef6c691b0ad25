//! Aligned table rendering with the console's cell formats.
//!
//! The admin pages hand-build every table: fixed columns, currency and
//! score formatting, status badges. This module is the terminal analog.
//! Each listing view declares its columns once; the renderer handles
//! width fitting, truncation, alignment, and optional ANSI color.

use serde_json::{Map, Value};

/// Rendering options resolved from UI prefs.
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// How a cell value is formatted and aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Plain text, left-aligned.
    Text,
    /// Case status label; colored by status when color is on.
    Status,
    /// Whole number, right-aligned.
    Number,
    /// Currency amount, right-aligned, with cents and thousands grouping.
    Currency,
    /// Timestamp shown as its date part.
    Date,
    /// Notification read flag, shown as read/unread.
    ReadFlag,
}

impl CellKind {
    const fn right_aligned(self) -> bool {
        matches!(self, Self::Number | Self::Currency)
    }
}

/// One declared column of a listing view.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    pub kind: CellKind,
}

impl Column {
    const fn new(header: &'static str, field: &'static str, kind: CellKind) -> Self {
        Self { header, field, kind }
    }
}

/// Admin case listing (`cases filter`, `cases list`).
pub const CASE_COLUMNS: &[Column] = &[
    Column::new("case", "case_id", CellKind::Text),
    Column::new("client", "client_name", CellKind::Text),
    Column::new("email", "client_email", CellKind::Text),
    Column::new("status", "status", CellKind::Status),
    Column::new("score", "ai_score", CellKind::Number),
    Column::new("amount", "estimated_claim_amount", CellKind::Currency),
    Column::new("updated", "updated_at", CellKind::Date),
];

/// The claimant's own cases (`cases mine`).
pub const MY_CASE_COLUMNS: &[Column] = &[
    Column::new("case", "case_id", CellKind::Text),
    Column::new("status", "status", CellKind::Status),
    Column::new("resume", "resume_step", CellKind::Text),
    Column::new("progress", "progress", CellKind::Text),
    Column::new("updated", "updated_at", CellKind::Date),
];

/// Notification feed (`notifications list` and `--watch` ticks).
pub const NOTIFICATION_COLUMNS: &[Column] = &[
    Column::new("id", "id", CellKind::Text),
    Column::new("kind", "kind", CellKind::Text),
    Column::new("read", "read", CellKind::ReadFlag),
    Column::new("title", "title", CellKind::Text),
    Column::new("case", "case_id", CellKind::Text),
    Column::new("created", "created_at", CellKind::Date),
];

/// Saved filter listing; rows are assembled from the name-keyed map.
pub const SAVED_FILTER_COLUMNS: &[Column] = &[
    Column::new("name", "name", CellKind::Text),
    Column::new("criteria", "criteria", CellKind::Text),
    Column::new("updated", "updated_at", CellKind::Date),
];

/// Per-status counts on the analytics view.
pub const STATUS_COUNT_COLUMNS: &[Column] = &[
    Column::new("status", "status", CellKind::Status),
    Column::new("cases", "count", CellKind::Number),
];

/// Render JSON object rows under the declared columns.
#[must_use]
pub fn render_rows(
    columns: &[Column],
    rows: &[&Map<String, Value>],
    options: TableOptions,
) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| format_value(row.get(column.field), column.kind))
                .collect()
        })
        .collect();

    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    let kinds: Vec<CellKind> = columns.iter().map(|c| c.kind).collect();
    render_aligned(&headers, &kinds, &cells, options)
}

/// Render rows under ad hoc text columns, for shapes with no declared view.
#[must_use]
pub fn render_generic(headers: &[&str], cells: &[Vec<String>], options: TableOptions) -> String {
    if cells.is_empty() {
        return String::from("(no rows)");
    }
    let kinds = vec![CellKind::Text; headers.len()];
    render_aligned(headers, &kinds, cells, options)
}

/// Render key/value pairs as a two-column table, for single entities.
#[must_use]
pub fn render_entity(entries: &[(String, String)], options: TableOptions) -> String {
    let cells: Vec<Vec<String>> = entries
        .iter()
        .map(|(key, value)| vec![key.clone(), value.clone()])
        .collect();
    render_aligned(
        &["field", "value"],
        &[CellKind::Text, CellKind::Text],
        &cells,
        options,
    )
}

fn render_aligned(
    headers: &[&str],
    kinds: &[CellKind],
    cells: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();
    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + cells.len());
    lines.push(header_line);
    lines.push(divider);
    for row in cells {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate(value, *width);
                let padded = pad(&truncated, *width, kinds[index].right_aligned());
                if options.color {
                    colorize(&padded, kinds[index])
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Shrink the widest shrinkable column until the table fits, keeping each
/// column at least wide enough for its header.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else { return };
    if widths.is_empty() {
        return;
    }

    let separators = (widths.len() - 1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;
    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|&(index, width)| *width > headers[index].len().max(4))
            .max_by_key(|&(_, width)| *width);
        let Some((index, _)) = widest else { break };
        widths[index] -= 1;
        total -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn format_value(value: Option<&Value>, kind: CellKind) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    if value.is_null() {
        return "-".to_string();
    }
    match kind {
        CellKind::Text | CellKind::Status => match value {
            Value::String(text) => text.clone(),
            other => compact(other),
        },
        CellKind::Number => match value {
            Value::Number(number) => number.to_string(),
            other => compact(other),
        },
        CellKind::Currency => value.as_f64().map_or_else(|| compact(value), format_currency),
        CellKind::Date => match value {
            Value::String(timestamp) => date_part(timestamp).to_string(),
            other => compact(other),
        },
        CellKind::ReadFlag => match value {
            Value::Bool(true) => "read".to_string(),
            Value::Bool(false) => "unread".to_string(),
            other => compact(other),
        },
    }
}

pub(crate) fn compact(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// `2026-02-01T14:00:00Z` → `2026-02-01`; anything else passes through.
fn date_part(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) => date,
        None => timestamp,
    }
}

/// `1450` → `$1,450.00`. Rounds to cents.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{sign}${}.{:02}",
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn colorize(padded: &str, kind: CellKind) -> String {
    let code = match kind {
        CellKind::Status => match padded.trim_end() {
            "Submitted" => Some("32"),
            "Submission pending" => Some("33"),
            "Document submission" => Some("36"),
            _ => None,
        },
        CellKind::ReadFlag => (padded.trim_end() == "unread").then_some("33"),
        _ => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn rows_of(value: &Value) -> Vec<&Map<String, Value>> {
        value
            .as_array()
            .expect("fixture is an array")
            .iter()
            .filter_map(Value::as_object)
            .collect()
    }

    #[test]
    fn currency_groups_thousands_and_keeps_cents() {
        assert_eq!(format_currency(1450.0), "$1,450.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-75.25), "-$75.25");
    }

    #[test]
    fn date_cells_drop_the_time_part() {
        assert_eq!(date_part("2026-02-01T14:00:00Z"), "2026-02-01");
        assert_eq!(date_part("2026-02-01"), "2026-02-01");
    }

    #[test]
    fn missing_and_null_values_render_as_dash() {
        let fixture = json!([{ "case_id": "case_001", "ai_score": null }]);
        let table = render_rows(CASE_COLUMNS, &rows_of(&fixture), PLAIN);
        let row = table.lines().nth(2).expect("one data row");
        assert!(row.contains("case_001"));
        assert!(row.contains('-'));
    }

    #[test]
    fn numeric_columns_are_right_aligned() {
        let fixture = json!([
            { "case_id": "a", "ai_score": 7, "estimated_claim_amount": 1450.0 },
            { "case_id": "b", "ai_score": 100, "estimated_claim_amount": 12.5 }
        ]);
        let table = render_rows(CASE_COLUMNS, &rows_of(&fixture), PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        let header = lines[0];
        let score_end = header.find("score").expect("score header") + "score".len();
        assert_eq!(&lines[2][score_end - 1..score_end], "7");
        assert_eq!(&lines[3][score_end - 3..score_end], "100");
    }

    #[test]
    fn read_flag_renders_read_state() {
        let fixture = json!([
            { "id": "n1", "read": true },
            { "id": "n2", "read": false }
        ]);
        let table = render_rows(NOTIFICATION_COLUMNS, &rows_of(&fixture), PLAIN);
        assert!(table.contains("read"));
        assert!(table.contains("unread"));
    }

    #[test]
    fn empty_rows_render_placeholder() {
        assert_eq!(render_rows(CASE_COLUMNS, &[], PLAIN), "(no rows)");
    }

    #[test]
    fn max_width_truncates_the_widest_column() {
        let fixture = json!([{
            "case_id": "case_001",
            "client_name": "An Extremely Long Client Name That Overflows The Terminal",
            "status": "Submitted"
        }]);
        let table = render_rows(
            CASE_COLUMNS,
            &rows_of(&fixture),
            TableOptions {
                max_width: Some(72),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 72, "line too wide: {line:?}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn status_cells_are_colored_when_enabled() {
        let fixture = json!([{ "case_id": "a", "status": "Submitted" }]);
        let colored = render_rows(
            CASE_COLUMNS,
            &rows_of(&fixture),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(colored.contains("\u{1b}[32mSubmitted"));

        let plain = render_rows(CASE_COLUMNS, &rows_of(&fixture), PLAIN);
        assert!(!plain.contains('\u{1b}'));
    }

    #[test]
    fn entity_table_aligns_keys_and_values() {
        let entries = vec![
            ("authenticated".to_string(), "true".to_string()),
            ("role".to_string(), "admin".to_string()),
        ];
        let table = render_entity(&entries, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("authenticated"));
        assert!(lines[3].starts_with("role"));
    }
}
