//! sqlgrade: grading helpers for SQL exercises.
//!
//! Given the result table of a learner's query, decide whether it is
//! equivalent to a reference answer, and whether the query text obeys
//! pedagogical constraints (must/must-not use certain SQL constructs).
//!
//! - [`canonical`]: order- and format-insensitive encoding of a result table
//! - [`fingerprint`]: SHA-256 digest of the canonical encoding
//! - [`validate`]: statement gate, process rules, and result validation,
//!   each returning a [`validate::Verdict`]
//! - [`config`]: per-exercise YAML configuration composing the checks
//!
//! Query execution, UI, and history persistence belong to the caller.

pub mod canonical;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fingerprint;
pub mod logging;
pub mod table;
pub mod validate;

pub use error::{GradeError, Result};
