//! CSV table types returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A table row: column key to cell value.
///
/// Cells are an open value type. Nothing checks that a row's keys match the
/// table's columns.
pub type Row = Map<String, Value>;

/// Identifier and display label of one CSV column.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnInfo {
    /// Key used to look cells up in each row
    pub key: String,
    /// Header label
    pub name: String,
    /// Optional description, shown as the header tooltip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Decoded column/row representation of a CSV file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CsvTable {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Row>,
}

impl CsvTable {
    /// Cell of `row` under `column`, if the row carries that key.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        let key = &self.columns.get(column)?.key;
        self.rows.get(row)?.get(key)
    }
}

/// Broad kind of a cell value, used for styling and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellKind {
    /// Missing key or JSON `null`
    Empty,
    Bool,
    Number,
    Text,
    /// Arrays and objects
    Nested,
}

impl CellKind {
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Empty,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::Text,
            Some(Value::Array(_)) | Some(Value::Object(_)) => Self::Nested,
        }
    }
}

/// Text shown for a cell. Values are rendered literally, never coerced.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(nested) => nested.to_string(),
    }
}
