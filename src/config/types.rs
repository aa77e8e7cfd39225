//! Configuration sections and defaults for exercises.

use crate::canonical::{CanonicalOptions, DEFAULT_FLOAT_PRECISION, DEFAULT_NULL_TOKEN};
use crate::validate::{ProcessRules, ResultValidator};
use serde::{Deserialize, Serialize};

/// Required and forbidden process rules.
///
/// Names stay as strings here; [`ExerciseConfig::validate`](super::ExerciseConfig::validate)
/// checks them against the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    pub require: Vec<String>,
    pub forbid: Vec<String>,
}

impl ProcessConfig {
    pub fn is_empty(&self) -> bool {
        self.require.is_empty() && self.forbid.is_empty()
    }

    pub fn to_rules(&self) -> ProcessRules {
        ProcessRules::new(self.require.iter().cloned(), self.forbid.iter().cloned())
    }
}

/// Expected result and how to compare against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultCheckConfig {
    /// SHA-256 hex digest of the reference result (see `sqlgrade fingerprint`).
    pub expected_digest: String,

    #[serde(default)]
    pub required_columns: Vec<String>,

    #[serde(default)]
    pub exact_columns: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_row_count: Option<usize>,

    #[serde(default = "default_true")]
    pub sort_rows: bool,

    #[serde(default)]
    pub sort_columns: bool,

    #[serde(default = "default_true")]
    pub normalize_whitespace: bool,

    #[serde(default = "default_null_token")]
    pub null_token: String,

    /// Fractional digits kept for numeric cells.
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,

    #[serde(default = "default_true")]
    pub hide_missing_columns: bool,

    #[serde(default)]
    pub hide_row_count: bool,
}

impl Default for ResultCheckConfig {
    fn default() -> Self {
        Self {
            expected_digest: String::new(),
            required_columns: Vec::new(),
            exact_columns: false,
            expected_row_count: None,
            sort_rows: default_true(),
            sort_columns: false,
            normalize_whitespace: default_true(),
            null_token: default_null_token(),
            float_precision: default_float_precision(),
            hide_missing_columns: default_true(),
            hide_row_count: false,
        }
    }
}

impl ResultCheckConfig {
    /// Canonicalization options for this exercise.
    pub fn canonical_options(&self) -> CanonicalOptions {
        CanonicalOptions {
            sort_rows: self.sort_rows,
            sort_columns: self.sort_columns,
            normalize_whitespace: self.normalize_whitespace,
            null_token: self.null_token.clone(),
            float_precision: self.float_precision,
        }
    }

    pub fn to_validator(&self) -> ResultValidator {
        ResultValidator::new(self.expected_digest.clone())
            .required_columns(self.required_columns.iter().cloned())
            .exact_columns(self.exact_columns)
            .expected_row_count(self.expected_row_count)
            .hide_missing_columns(self.hide_missing_columns)
            .hide_row_count(self.hide_row_count)
            .canonical_options(self.canonical_options())
    }
}

pub fn default_true() -> bool {
    true
}

pub fn default_null_token() -> String {
    DEFAULT_NULL_TOKEN.to_string()
}

pub fn default_float_precision() -> usize {
    DEFAULT_FLOAT_PRECISION
}
