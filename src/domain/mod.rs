//! Core data model for one export operation.
//!
//! Everything here is created fresh per invocation and lives only for the
//! duration of one export; there is no cache or cross-invocation state.

/// A single result cell, as a closed variant type.
///
/// `Other` covers blobs and anything the database driver cannot classify as
/// one of the first four cases. Its payload is a best-effort textual
/// rendering produced once at the driver boundary (blobs become lowercase
/// hex); the rendering core treats it as opaque text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Other(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric values center-align in the rendered table.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Real(_))
    }

    /// Canonical cell text: default numeric formatting, text verbatim,
    /// null as the empty string. A null cell and an empty text cell are
    /// intentionally indistinguishable in the output.
    pub fn render_cell(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Integer(v) => v.to_string(),
            Value::Real(v) => v.to_string(),
            Value::Text(s) | Value::Other(s) => s.clone(),
        }
    }
}

/// The shape handed over by the database driver: column names in projection
/// order (duplicates allowed) and rows aligned positionally with them.
///
/// Row width is a caller contract: the renderer rejects any row whose length
/// differs from `columns.len()` rather than truncating or padding.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}
