//! Plain-text rendering of query results.
//!
//! Turns result sets into aligned text tables for the shell. Truncation to
//! the configured row limit happens here, in the display layer only; the
//! session core never drops rows.

use crate::config::DisplayConfig;
use crate::engine::{ResultSet, Value};
use crate::query::QueryOutcome;

/// Informational message shown for the `Empty` outcome.
pub const EMPTY_RESULT_MESSAGE: &str = "Query executed successfully but returned no results";

/// Formats a single cell for display.
pub fn format_value(value: &Value, config: &DisplayConfig) -> String {
    if value.is_null() {
        config.null_text.clone()
    } else {
        value.to_display_string()
    }
}

/// Renders a classified outcome for the shell.
pub fn render_outcome(outcome: &QueryOutcome, config: &DisplayConfig) -> String {
    match outcome {
        QueryOutcome::Rows(set) => render_result_set(set, config),
        QueryOutcome::Empty => EMPTY_RESULT_MESSAGE.to_string(),
    }
}

/// Renders a result set as an aligned text table.
pub fn render_result_set(set: &ResultSet, config: &DisplayConfig) -> String {
    let total = set.row_count();
    let shown = total.min(config.max_rows);

    let cells: Vec<Vec<String>> = set.rows[..shown]
        .iter()
        .map(|row| row.iter().map(|v| format_value(v, config)).collect())
        .collect();

    // Column width is the widest of header and shown cells.
    let mut widths: Vec<usize> = set.columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &set.columns, &widths);
    push_rule(&mut out, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }

    if shown < total {
        out.push_str(&format!("(showing {shown} of {total} rows)\n"));
    } else {
        out.push_str(&format!("({total} rows)\n"));
    }

    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_rule(out: &mut String, widths: &[usize]) {
    let line = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&line);
    out.push('\n');
}
