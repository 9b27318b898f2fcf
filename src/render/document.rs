//! Assembly of the final Markdown document.

use anyhow::Result;

use crate::domain::QueryResult;
use crate::render::table::render_table;

/// Build the full document: `# <title>`, blank line, optional comment body
/// followed by one blank line, then the rendered table.
///
/// The title is treated as an opaque string; deriving it (from a file name
/// or anywhere else) is the caller's business. A degenerate result -- zero
/// columns or zero rows -- produces no table at all, since a heading and
/// alignment pair with no data reads as a broken table.
pub fn assemble_document(
    title: &str,
    comments: &[String],
    result: &QueryResult,
) -> Result<Vec<String>> {
    let mut lines = vec![format!("# {title}"), String::new()];

    if !comments.is_empty() {
        lines.extend(comments.iter().cloned());
        lines.push(String::new());
    }

    if result.columns.is_empty() || result.rows.is_empty() {
        return Ok(lines);
    }

    lines.extend(render_table(&result.columns, &result.rows)?);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::assemble_document;
    use crate::domain::{QueryResult, Value};

    fn result(columns: &[&str], rows: Vec<Vec<Value>>) -> QueryResult {
        QueryResult {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn full_document_with_comments_and_table() {
        let result = result(
            &["id", "name"],
            vec![
                vec![Value::Integer(1), Value::Text("Ann".to_string())],
                vec![Value::Integer(2), Value::Null],
            ],
        );
        let lines = assemble_document("query", &["Lists users".to_string()], &result)
            .expect("assemble");
        assert_eq!(
            lines,
            vec!["# query", "", "Lists users", "", "|id|name|", "|:-:|---|", "|1|Ann|", "|2||"]
        );
    }

    #[test]
    fn no_comments_means_no_stray_blank_line() {
        let result = result(&["id"], vec![vec![Value::Integer(1)]]);
        let lines = assemble_document("query", &[], &result).expect("assemble");
        assert_eq!(lines, vec!["# query", "", "|id|", "|:-:|", "|1|"]);
    }

    #[test]
    fn zero_rows_stop_after_title_and_comments() {
        let result = result(&["id", "name"], vec![]);
        let lines = assemble_document("query", &["Empty".to_string()], &result)
            .expect("assemble");
        assert_eq!(lines, vec!["# query", "", "Empty", ""]);
    }

    #[test]
    fn zero_columns_stop_after_title() {
        let result = result(&[], vec![]);
        let lines = assemble_document("query", &[], &result).expect("assemble");
        assert_eq!(lines, vec!["# query", ""]);
    }

    #[test]
    fn row_width_violation_propagates() {
        let result = result(&["id", "name"], vec![vec![Value::Integer(1)]]);
        assert!(assemble_document("query", &[], &result).is_err());
    }
}
