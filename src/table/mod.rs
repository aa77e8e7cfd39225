//! Result tables produced by executing a learner's query.
//!
//! A table is an ordered list of uniquely named columns plus an ordered list
//! of rows. Each row maps column name to a scalar [`Value`]; a column that is
//! absent from a row reads as null. Tables are consumed read-only by the
//! canonicalizer.

mod io;
mod value;


use crate::error::{GradeError, Result};
use std::collections::{BTreeMap, HashSet};

pub use value::Value;

/// One row of a result table, keyed by column name.
pub type Row = BTreeMap<String, Value>;

static NULL: Value = Value::Null;

/// Column/row data returned by a query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ResultTable {
    /// Build a table from column names and keyed rows.
    ///
    /// # Returns
    ///
    /// * `Err(GradeError::UserError)` - duplicate column names, or a row with a
    ///   key that is not one of `columns`
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(GradeError::UserError(format!(
                    "duplicate column name '{}' in result table",
                    column
                )));
            }
        }

        for (index, row) in rows.iter().enumerate() {
            if let Some(key) = row.keys().find(|k| !seen.contains(k.as_str())) {
                return Err(GradeError::UserError(format!(
                    "row {} has value for unknown column '{}'",
                    index + 1,
                    key
                )));
            }
        }

        Ok(Self { columns, rows })
    }

    /// Build a table from positional rows aligned with `columns`.
    pub fn from_positional<C, R, V>(columns: C, rows: R) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut keyed = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let values: Vec<Value> = row.into_iter().map(Into::into).collect();
            if values.len() != columns.len() {
                return Err(GradeError::UserError(format!(
                    "row {} has {} values but the table has {} columns",
                    index + 1,
                    values.len(),
                    columns.len()
                )));
            }
            keyed.push(columns.iter().cloned().zip(values).collect());
        }

        Self::new(columns, keyed)
    }

    /// Column names in query order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in query order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cell at `row`/`column`. Missing cells read as [`Value::Null`].
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let row = self.rows.get(row)?;
        if !self.has_column(column) {
            return None;
        }
        Some(row.get(column).unwrap_or(&NULL))
    }
}
