//! Database driver boundary.
//!
//! Executes the query and converts rusqlite's native value typing into the
//! crate's own `Value` variant, so the rendering core never sees a driver
//! type.

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::domain::{QueryResult, Value};

/// Execute `sql` and collect the full result set.
pub fn run_query(conn: &Connection, sql: &str) -> Result<QueryResult> {
    let mut stmt = conn.prepare(sql).context("Failed to prepare SQL statement")?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let width = columns.len();

    let mut out = Vec::new();
    let mut rows = stmt.query([]).context("Failed to execute SQL statement")?;
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(width);
        for idx in 0..width {
            values.push(value_from_sql(row.get_ref(idx)?));
        }
        out.push(values);
    }

    Ok(QueryResult { columns, rows: out })
}

/// Map a driver value onto the four-case core variant; blobs degrade to
/// `Other` with a hex payload rather than failing.
fn value_from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Integer(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Other(encode_blob_hex(bytes)),
    }
}

fn encode_blob_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
