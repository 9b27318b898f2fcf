//! Markdown table rendering for query results.

use anyhow::{ensure, Result};

use crate::domain::Value;

/// Alignment token for a column whose first non-null value is numeric.
const ALIGN_CENTER: &str = ":-:";
/// Alignment token for everything else, including all-null columns.
const ALIGN_LEFT: &str = "---";

/// Render a result set as Markdown table lines: heading, alignment, then
/// one line per row in result order.
///
/// Zero rows render as nothing at all rather than an empty table skeleton.
/// A row whose width differs from the column count is a caller contract
/// violation and fails the whole render.
///
/// Column names and text cells go out verbatim (underscores in names
/// excepted), so a literal `|` inside either will corrupt the table layout.
pub fn render_table(columns: &[String], rows: &[Vec<Value>]) -> Result<Vec<String>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    for (idx, row) in rows.iter().enumerate() {
        ensure!(
            row.len() == columns.len(),
            "row {} has {} values but the query returned {} columns",
            idx,
            row.len(),
            columns.len()
        );
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(heading_line(columns));
    lines.push(alignment_line(columns.len(), rows));
    for row in rows {
        let cells: Vec<String> = row.iter().map(Value::render_cell).collect();
        lines.push(format!("|{}|", cells.join("|")));
    }

    Ok(lines)
}

/// Underscores read like escape artifacts in rendered table headers, so
/// column names swap them for spaces.
fn heading_line(columns: &[String]) -> String {
    let mut line = String::from("|");
    for name in columns {
        line.push_str(&name.replace('_', " "));
        line.push('|');
    }
    line
}

/// One token per column: center when numeric, left otherwise.
///
/// Column type comes from the first non-null value scanning rows in order,
/// not from row 0 alone -- a null in the first row must not decide the
/// alignment when a later row carries a value. Columns that are null in
/// every row default to left.
fn alignment_line(width: usize, rows: &[Vec<Value>]) -> String {
    let mut line = String::from("|");
    for idx in 0..width {
        let first_non_null = rows.iter().map(|row| &row[idx]).find(|v| !v.is_null());
        let token = match first_non_null {
            Some(value) if value.is_numeric() => ALIGN_CENTER,
            _ => ALIGN_LEFT,
        };
        line.push_str(token);
        line.push('|');
    }
    line
}
