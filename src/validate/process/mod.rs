//! Process rules: lexical checks over raw query text.
//!
//! An exercise can require or forbid a fixed set of SQL constructs
//! (`where`, `join`, `group_by`, `having`, `distinct`, `order_by`, `limit`,
//! `subquery`). Detection is substring-based on a lowercased,
//! whitespace-collapsed copy of the query; the query is never parsed.
//!
//! Error handling:
//! - Unknown rule names are configuration errors and produce a failing
//!   verdict with [`FailureKind::Configuration`](super::FailureKind)
//! - The first violated rule short-circuits: required-missing is checked
//!   before forbidden-present, each in the order given

mod checker;
mod rules;


pub use checker::{ProcessRules, check_process_rules, normalize_query};
pub use rules::{ProcessRule, UnknownRule};
