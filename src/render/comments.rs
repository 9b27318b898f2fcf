//! Header-comment extraction from SQL source.

/// Collect the leading run of `--` comment lines, stripped of the marker and
/// surrounding whitespace.
///
/// Comments are recognized only as a contiguous prefix of the file: a blank
/// line, a statement, or an indented comment ends extraction, and later `--`
/// lines are ignored. Header comments are metadata; body comments are not.
pub fn header_comments(sql: &str) -> Vec<String> {
    let mut comments = Vec::new();

    for line in sql.lines() {
        let Some(rest) = line.strip_prefix("--") else {
            break;
        };
        comments.push(rest.trim_start_matches(' ').trim_end().to_string());
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::header_comments;

    #[test]
    fn extracts_contiguous_prefix_only() {
        let sql = "-- a\n-- b\nselect 1\n-- trailing comment\n";
        assert_eq!(header_comments(sql), vec!["a", "b"]);
    }

    #[test]
    fn no_comments_when_file_starts_with_a_statement() {
        assert_eq!(header_comments("select 1\n-- a\n"), Vec::<String>::new());
    }

    #[test]
    fn blank_line_terminates_extraction() {
        let sql = "-- a\n\n-- b\nselect 1\n";
        assert_eq!(header_comments(sql), vec!["a"]);
    }

    #[test]
    fn indented_comment_terminates_extraction() {
        let sql = "-- a\n  -- indented\nselect 1\n";
        assert_eq!(header_comments(sql), vec!["a"]);
    }

    #[test]
    fn bare_marker_yields_empty_string() {
        assert_eq!(header_comments("--\n-- b\n"), vec!["", "b"]);
    }

    #[test]
    fn strips_marker_spaces_and_line_endings() {
        let sql = "--   padded   \r\n-- tail\t\r\nselect 1\r\n";
        assert_eq!(header_comments(sql), vec!["padded", "tail"]);
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert_eq!(header_comments(""), Vec::<String>::new());
    }
}
