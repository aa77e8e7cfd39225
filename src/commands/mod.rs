//! Command implementations for sqlgrade.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input and verdict-reporting helpers they share.

mod check;
mod fingerprint;
mod rules;


use crate::cli::{CanonicalFlags, Command, QuerySource};
use serde::Serialize;
use sqlgrade::canonical::CanonicalOptions;
use sqlgrade::error::{GradeError, Result};
use sqlgrade::validate::{FailureKind, Verdict};
use std::io::Read;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Fingerprint(args) => fingerprint::cmd_fingerprint(args),
        Command::Canonical(args) => fingerprint::cmd_canonical(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Rules(args) => rules::cmd_rules(args),
    }
}

impl CanonicalFlags {
    pub fn to_options(&self) -> CanonicalOptions {
        CanonicalOptions {
            sort_rows: !self.no_sort_rows,
            sort_columns: self.sort_columns,
            normalize_whitespace: !self.keep_whitespace,
            null_token: self.null_token.clone(),
            float_precision: self.precision,
        }
    }
}

impl QuerySource {
    /// Read the query text from `--sql`, a file, or stdin (`-`).
    pub fn read(&self) -> Result<String> {
        if let Some(sql) = &self.sql {
            return Ok(sql.clone());
        }

        match self.query.as_deref() {
            Some(path) if path.as_os_str() == "-" => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).map_err(|e| {
                    GradeError::UserError(format!("failed to read query from stdin: {}", e))
                })?;
                Ok(text)
            }
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                GradeError::UserError(format!(
                    "failed to read query file '{}': {}",
                    path.display(),
                    e
                ))
            }),
            None => Err(GradeError::UserError(
                "no query given. Use --query <FILE> or --sql <TEXT>.".to_string(),
            )),
        }
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| GradeError::UserError(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Print a verdict and turn it into the command's outcome.
pub(crate) fn report_verdict(verdict: &Verdict, json: bool) -> Result<()> {
    if json {
        print_json(verdict)?;
    } else {
        println!("{}", verdict.format_report());
    }
    verdict_outcome(verdict)
}

/// Map a verdict onto exit semantics: pass is success, a configuration
/// failure is a user error, anything else is a validation failure.
pub(crate) fn verdict_outcome(verdict: &Verdict) -> Result<()> {
    match verdict.failure {
        None => Ok(()),
        Some(kind) if kind.is_learner_facing() => Err(GradeError::ValidationError(format!(
            "submission did not pass ({})",
            failure_label(kind)
        ))),
        Some(_) => Err(GradeError::UserError(format!(
            "exercise is misconfigured: {}",
            verdict.messages.join(" ")
        ))),
    }
}

fn failure_label(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Configuration => "configuration",
        FailureKind::Statement => "statement",
        FailureKind::Process => "process rules",
        FailureKind::Structure => "result structure",
        FailureKind::Content => "result content",
    }
}
