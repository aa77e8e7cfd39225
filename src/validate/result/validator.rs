//! The result validator configuration object.

use super::messages::{
    NOT_CORRECT_MESSAGE, WRONG_COLUMNS_MESSAGE, WRONG_ROWS_MESSAGE, missing_columns_message,
    pick_success_message,
};
use crate::canonical::CanonicalOptions;
use crate::fingerprint::fingerprint;
use crate::table::ResultTable;
use crate::validate::{FailureKind, Validator, Verdict};
use rand::{Rng, RngCore};
use std::collections::BTreeSet;

/// Validates a result table against an expected fingerprint.
///
/// Holds the per-exercise configuration; [`validate`](Self::validate) is a
/// pure function of its inputs plus this configuration, so one validator can
/// be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultValidator {
    expected_digest: String,
    required_columns: Vec<String>,
    exact_columns: bool,
    expected_row_count: Option<usize>,
    hide_missing_columns: bool,
    hide_row_count: bool,
    canonical: CanonicalOptions,
}

/// Start building a validator for `expected_digest` with default settings.
///
/// Defaults: no required columns, no exact-column check, no row count,
/// rows sorted, columns not sorted, missing columns hidden, row count not
/// hidden. Adjust with the builder methods on [`ResultValidator`].
pub fn build_validator(expected_digest: impl Into<String>) -> ResultValidator {
    ResultValidator::new(expected_digest)
}

impl ResultValidator {
    pub fn new(expected_digest: impl Into<String>) -> Self {
        Self {
            expected_digest: expected_digest.into(),
            required_columns: Vec::new(),
            exact_columns: false,
            expected_row_count: None,
            hide_missing_columns: true,
            hide_row_count: false,
            canonical: CanonicalOptions::default(),
        }
    }

    /// Columns that must be present in the result.
    pub fn required_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Require the result's column set to equal `required_columns` exactly.
    ///
    /// Has no effect while `required_columns` is empty.
    pub fn exact_columns(mut self, exact: bool) -> Self {
        self.exact_columns = exact;
        self
    }

    pub fn expected_row_count(mut self, rows: Option<usize>) -> Self {
        self.expected_row_count = rows;
        self
    }

    pub fn sort_rows(mut self, sort: bool) -> Self {
        self.canonical.sort_rows = sort;
        self
    }

    pub fn sort_columns(mut self, sort: bool) -> Self {
        self.canonical.sort_columns = sort;
        self
    }

    /// Report missing columns generically instead of naming them.
    pub fn hide_missing_columns(mut self, hide: bool) -> Self {
        self.hide_missing_columns = hide;
        self
    }

    /// Accepted for configuration compatibility. Row-count failures are
    /// reported generically either way.
    pub fn hide_row_count(mut self, hide: bool) -> Self {
        self.hide_row_count = hide;
        self
    }

    /// Replace the full canonicalization options (sort flags included).
    pub fn canonical_options(mut self, options: CanonicalOptions) -> Self {
        self.canonical = options;
        self
    }

    /// Validate a submission using thread-local randomness for the success
    /// message.
    ///
    /// `db` is accepted so callers can pass their live connection, but it is
    /// never touched.
    pub fn validate<D: ?Sized>(&self, query: &str, table: &ResultTable, db: &D) -> Verdict {
        self.validate_with_rng(query, table, db, &mut rand::thread_rng())
    }

    /// Validate a submission with an injected source of randomness.
    pub fn validate_with_rng<D: ?Sized, R: Rng + ?Sized>(
        &self,
        _query: &str,
        table: &ResultTable,
        _db: &D,
        rng: &mut R,
    ) -> Verdict {
        if let Some(verdict) = self.check_structure(table) {
            tracing::debug!(messages = ?verdict.messages, "result failed structural checks");
            return verdict;
        }

        let actual = fingerprint(table, &self.canonical);
        if actual.digest != self.expected_digest {
            tracing::debug!(
                expected = %self.expected_digest,
                actual = %actual.digest,
                "result fingerprint mismatch"
            );
            return Verdict::fail(FailureKind::Content, NOT_CORRECT_MESSAGE);
        }

        Verdict::pass(vec![pick_success_message(rng).to_string()])
    }

    /// Column and row-count checks, in order. `None` when all pass.
    fn check_structure(&self, table: &ResultTable) -> Option<Verdict> {
        if !self.required_columns.is_empty() {
            let missing: Vec<&str> = self
                .required_columns
                .iter()
                .filter(|c| !table.has_column(c))
                .map(String::as_str)
                .collect();

            if !missing.is_empty() {
                let message = if self.hide_missing_columns {
                    WRONG_COLUMNS_MESSAGE.to_string()
                } else {
                    missing_columns_message(&missing)
                };
                return Some(Verdict::fail(FailureKind::Structure, message));
            }

            if self.exact_columns {
                let actual: BTreeSet<&str> = table.columns().iter().map(String::as_str).collect();
                let expected: BTreeSet<&str> =
                    self.required_columns.iter().map(String::as_str).collect();
                if actual != expected {
                    return Some(Verdict::fail(FailureKind::Structure, WRONG_COLUMNS_MESSAGE));
                }
            }
        }

        if let Some(expected) = self.expected_row_count {
            if table.row_count() != expected {
                // Generic regardless of `hide_row_count`; no non-hidden variant exists yet.
                return Some(Verdict::fail(FailureKind::Structure, WRONG_ROWS_MESSAGE));
            }
        }

        None
    }
}

impl Validator for ResultValidator {
    fn check(&self, query: &str, table: &ResultTable, rng: &mut dyn RngCore) -> Verdict {
        self.validate_with_rng(query, table, &(), rng)
    }
}
