//! Canonicalization options and defaults.

use serde::{Deserialize, Serialize};

/// Token substituted for missing values.
pub const DEFAULT_NULL_TOKEN: &str = "<NA>";

/// Fractional digits kept for numeric cells.
///
/// Two digits suits currency-style exercises; exercises in other domains can
/// raise or lower it through [`CanonicalOptions::float_precision`].
pub const DEFAULT_FLOAT_PRECISION: usize = 2;

/// How a result table is canonicalized before hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalOptions {
    /// Sort rows by their full tuple of normalized cells.
    pub sort_rows: bool,
    /// Reorder columns alphabetically by name.
    pub sort_columns: bool,
    /// Collapse whitespace runs in non-numeric cells and trim the ends.
    pub normalize_whitespace: bool,
    /// Literal used for null/missing cells.
    pub null_token: String,
    /// Fractional digits for numeric cells.
    pub float_precision: usize,
}

impl Default for CanonicalOptions {
    fn default() -> Self {
        Self {
            sort_rows: true,
            sort_columns: false,
            normalize_whitespace: true,
            null_token: DEFAULT_NULL_TOKEN.to_string(),
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}
