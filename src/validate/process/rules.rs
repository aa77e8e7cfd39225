//! The closed vocabulary of process rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named SQL construct that an exercise can require or forbid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessRule {
    Where,
    Join,
    GroupBy,
    Having,
    Distinct,
    OrderBy,
    Limit,
    /// Nested `(SELECT`. Other subquery spellings (e.g. `( SELECT`, or
    /// `EXISTS` over a CTE) are not detected.
    Subquery,
}

/// A rule name outside the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown process rule '{0}'")]
pub struct UnknownRule(pub String);

impl ProcessRule {
    /// Every rule, in vocabulary order.
    pub const ALL: [ProcessRule; 8] = [
        ProcessRule::Where,
        ProcessRule::Join,
        ProcessRule::GroupBy,
        ProcessRule::Having,
        ProcessRule::Distinct,
        ProcessRule::OrderBy,
        ProcessRule::Limit,
        ProcessRule::Subquery,
    ];

    /// The rule's configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessRule::Where => "where",
            ProcessRule::Join => "join",
            ProcessRule::GroupBy => "group_by",
            ProcessRule::Having => "having",
            ProcessRule::Distinct => "distinct",
            ProcessRule::OrderBy => "order_by",
            ProcessRule::Limit => "limit",
            ProcessRule::Subquery => "subquery",
        }
    }

    /// Substring whose presence marks the construct as used.
    ///
    /// `join` is space-delimited so identifiers like `joined_at` do not match.
    pub fn needle(self) -> &'static str {
        match self {
            ProcessRule::Where => "where",
            ProcessRule::Join => " join ",
            ProcessRule::GroupBy => "group by",
            ProcessRule::Having => "having",
            ProcessRule::Distinct => "distinct",
            ProcessRule::OrderBy => "order by",
            ProcessRule::Limit => "limit",
            ProcessRule::Subquery => "(select",
        }
    }

    /// Whether the construct appears in an already-normalized query.
    ///
    /// See [`normalize_query`](super::normalize_query).
    pub fn detect(self, normalized_query: &str) -> bool {
        normalized_query.contains(self.needle())
    }

    /// Learner-facing message shown when this rule is violated.
    ///
    /// The same text is used whether the rule was required or forbidden.
    pub fn message(self) -> &'static str {
        match self {
            ProcessRule::Where => "Use a WHERE clause.",
            ProcessRule::Join => "Use a JOIN in this exercise.",
            ProcessRule::GroupBy => "Use GROUP BY in this exercise.",
            ProcessRule::Having => "Use HAVING in this exercise.",
            ProcessRule::Distinct => "Use DISTINCT in this exercise.",
            ProcessRule::OrderBy => "Don’t use ORDER BY for this exercise.",
            ProcessRule::Limit => "Don’t use LIMIT for this exercise.",
            ProcessRule::Subquery => "Don’t use subqueries for this exercise.",
        }
    }
}

impl FromStr for ProcessRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcessRule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

impl fmt::Display for ProcessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
