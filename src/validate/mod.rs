//! Validation module for sqlgrade.
//!
//! This module provides deterministic grading checks for a learner's
//! submission:
//! - Statement gate: only read-only SELECT/WITH queries are graded
//! - Process rules: required/forbidden SQL constructs in the query text
//! - Result validation: column/row shape, then fingerprint comparison
//!
//! Every check returns a [`Verdict`]. Learner mistakes are never errors.

pub mod process;
pub mod result;
pub mod statement;
mod verdict;

use crate::table::ResultTable;
use rand::RngCore;

pub use process::{ProcessRule, ProcessRules, check_process_rules, normalize_query};
pub use result::{
    NOT_CORRECT_MESSAGE, ResultValidator, SUCCESS_MESSAGES, WRONG_COLUMNS_MESSAGE,
    WRONG_ROWS_MESSAGE, build_validator,
};
pub use statement::{ReadOnlyStatement, check_statement};
pub use verdict::{FailureKind, Verdict};

/// A single grading check over a submitted query and its result.
pub trait Validator {
    /// Grade the submission. `rng` is only used for cosmetic message choice.
    fn check(&self, query: &str, table: &ResultTable, rng: &mut dyn RngCore) -> Verdict;
}
