//! Canonical form of a result table.
//!
//! Canonicalization turns a [`ResultTable`] into an order- and
//! format-insensitive grid of string tokens:
//!
//! 1. Every cell is normalized (nulls to a token, numbers to fixed precision,
//!    text whitespace-collapsed). See [`normalize_value`].
//! 2. Columns are optionally reordered by name.
//! 3. Rows are optionally stable-sorted on the full tuple of normalized cells.
//!
//! The result is only ever used as fingerprint input; it is never shown to a
//! learner.

mod normalize;
mod options;


use crate::table::ResultTable;

pub(crate) use normalize::collapse_whitespace;
pub use normalize::normalize_value;
pub use options::{CanonicalOptions, DEFAULT_FLOAT_PRECISION, DEFAULT_NULL_TOKEN};

/// Normalized, order-stable encoding of a result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForm {
    /// Column names in canonical order.
    pub columns: Vec<String>,
    /// Normalized cell tokens, one inner vector per row, aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

impl CanonicalForm {
    /// Serialize as CSV: a header line, then one line per row, each line
    /// terminated by `\n`.
    ///
    /// Fields are quoted only when they contain a separator, a quote, or a
    /// line break. A record made of a single empty field is written as `""`
    /// so it cannot be confused with a blank line.
    pub fn to_csv(&self) -> String {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(Vec::new());

        writer
            .write_record(&self.columns)
            .expect("writing CSV to an in-memory buffer is infallible");
        for row in &self.rows {
            writer
                .write_record(row)
                .expect("writing CSV to an in-memory buffer is infallible");
        }

        let bytes = writer
            .into_inner()
            .expect("flushing an in-memory CSV buffer is infallible");
        String::from_utf8(bytes).expect("CSV built from UTF-8 fields is UTF-8")
    }
}

/// Canonicalize a table. The input is never modified.
///
/// Cells are normalized before any sorting happens. Row sorting is skipped
/// for tables with no rows or no columns.
pub fn canonicalize(table: &ResultTable, options: &CanonicalOptions) -> CanonicalForm {
    let mut columns = table.columns().to_vec();
    if options.sort_columns {
        columns.sort();
    }

    let mut rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| match row.get(column) {
                    Some(value) => normalize_value(value, options),
                    None => options.null_token.clone(),
                })
                .collect()
        })
        .collect();

    // `sort` on slices is stable, so ties keep their query order.
    if options.sort_rows && !columns.is_empty() && !rows.is_empty() {
        rows.sort();
    }

    CanonicalForm { columns, rows }
}
