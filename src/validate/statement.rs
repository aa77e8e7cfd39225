//! Statement gate: only read-only queries are graded.

use super::{FailureKind, Validator, Verdict};
use crate::table::ResultTable;
use rand::RngCore;

/// Message for empty query text.
pub const EMPTY_QUERY_MESSAGE: &str = "Please type a query.";

/// Message for anything other than SELECT/WITH.
pub const READ_ONLY_MESSAGE: &str = "Only SELECT/WITH queries are allowed.";

/// Check that the query is a non-empty SELECT or WITH statement.
///
/// The check is a prefix match on the trimmed, lowercased text, so
/// `WITH x AS (...) DELETE ...` passes the gate. Execution-side
/// protections belong to the caller.
pub fn check_statement(query: &str) -> Verdict {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Verdict::fail(FailureKind::Statement, EMPTY_QUERY_MESSAGE);
    }

    let lowered = trimmed.to_lowercase();
    if lowered.starts_with("select") || lowered.starts_with("with") {
        Verdict::pass(Vec::new())
    } else {
        Verdict::fail(FailureKind::Statement, READ_ONLY_MESSAGE)
    }
}

/// [`check_statement`] as a composable check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOnlyStatement;

impl Validator for ReadOnlyStatement {
    fn check(&self, query: &str, _table: &ResultTable, _rng: &mut dyn RngCore) -> Verdict {
        check_statement(query)
    }
}
