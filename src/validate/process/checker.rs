//! Process rule evaluation.

use super::rules::ProcessRule;
use crate::canonical::collapse_whitespace;
use crate::table::ResultTable;
use crate::validate::{FailureKind, Validator, Verdict};
use rand::RngCore;
use std::str::FromStr;

/// Lowercase the query and collapse whitespace runs, trimming both ends.
pub fn normalize_query(query: &str) -> String {
    collapse_whitespace(&query.to_lowercase())
}

/// Check `query` against required and forbidden constructs.
///
/// # Returns
///
/// * `(passed, [])` when every required construct is present and every
///   forbidden one is absent
/// * a single-message failure for the first violation, checking all of
///   `require` (in order) before any of `forbid`
/// * a [`FailureKind::Configuration`] failure if any name is outside the
///   vocabulary, before anything else is checked
///
/// # Example
///
/// ```
/// use sqlgrade::validate::check_process_rules;
///
/// let verdict = check_process_rules("SELECT * FROM t WHERE x > 1", &["where"], &["limit"]);
/// assert!(verdict.passed);
/// assert!(verdict.messages.is_empty());
/// ```
pub fn check_process_rules<R, F>(query: &str, require: &[R], forbid: &[F]) -> Verdict
where
    R: AsRef<str>,
    F: AsRef<str>,
{
    let mut unknown: Vec<&str> = Vec::new();
    let names = require
        .iter()
        .map(|n| n.as_ref())
        .chain(forbid.iter().map(|n| n.as_ref()));
    for name in names {
        if ProcessRule::from_str(name).is_err() && !unknown.contains(&name) {
            unknown.push(name);
        }
    }

    if !unknown.is_empty() {
        tracing::warn!(rules = ?unknown, "exercise references unknown process rules");
        return Verdict::fail(
            FailureKind::Configuration,
            format!("Internal error: unknown process rule(s): {}", unknown.join(", ")),
        );
    }

    let normalized = normalize_query(query);

    // Names were validated above.
    let parsed = |name: &str| ProcessRule::from_str(name).ok();

    for rule in require.iter().filter_map(|n| parsed(n.as_ref())) {
        if !rule.detect(&normalized) {
            return Verdict::fail(FailureKind::Process, rule.message());
        }
    }

    for rule in forbid.iter().filter_map(|n| parsed(n.as_ref())) {
        if rule.detect(&normalized) {
            return Verdict::fail(FailureKind::Process, rule.message());
        }
    }

    Verdict::pass(Vec::new())
}

/// A required/forbidden rule set attached to one exercise.
///
/// Names are kept as written so that a misspelled rule surfaces as a
/// configuration verdict at check time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessRules {
    pub require: Vec<String>,
    pub forbid: Vec<String>,
}

impl ProcessRules {
    pub fn new<I, J, S, T>(require: I, forbid: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            require: require.into_iter().map(Into::into).collect(),
            forbid: forbid.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.require.is_empty() && self.forbid.is_empty()
    }

    /// Check a query against this rule set.
    pub fn check_query(&self, query: &str) -> Verdict {
        check_process_rules(query, &self.require, &self.forbid)
    }
}

impl Validator for ProcessRules {
    fn check(&self, query: &str, _table: &ResultTable, _rng: &mut dyn RngCore) -> Verdict {
        self.check_query(query)
    }
}
