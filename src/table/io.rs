//! JSON loading for result tables.
//!
//! Expected document shape:
//!
//! ```json
//! {
//!   "columns": ["name", "price"],
//!   "rows": [
//!     {"name": "apple", "price": 1.5},
//!     ["pear", null]
//!   ]
//! }
//! ```
//!
//! Rows may be objects keyed by column name or arrays aligned with `columns`.

use super::{ResultTable, Row, Value};
use crate::error::{GradeError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TableDocument {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<RowDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowDocument {
    Keyed(serde_json::Map<String, serde_json::Value>),
    Positional(Vec<serde_json::Value>),
}

impl ResultTable {
    /// Load a table from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GradeError::UserError(format!(
                "failed to read result table '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            GradeError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Parse a table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: TableDocument = serde_json::from_str(json).map_err(|e| {
            GradeError::UserError(format!("failed to parse result table JSON: {}", e))
        })?;

        let mut rows = Vec::with_capacity(doc.rows.len());
        for (index, row) in doc.rows.into_iter().enumerate() {
            let row: Row = match row {
                RowDocument::Keyed(map) => map
                    .into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
                RowDocument::Positional(values) => {
                    if values.len() != doc.columns.len() {
                        return Err(GradeError::UserError(format!(
                            "row {} has {} values but the table has {} columns",
                            index + 1,
                            values.len(),
                            doc.columns.len()
                        )));
                    }
                    doc.columns
                        .iter()
                        .cloned()
                        .zip(values.into_iter().map(Value::from_json))
                        .collect()
                }
            };
            rows.push(row);
        }

        ResultTable::new(doc.columns, rows)
    }
}
