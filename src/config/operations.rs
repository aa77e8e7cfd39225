//! Exercise loading, validation, and grading.

use super::model::ExerciseConfig;
use crate::error::{GradeError, Result};
use crate::table::ResultTable;
use crate::validate::{ProcessRule, ReadOnlyStatement, Validator, Verdict};
use rand::Rng;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Longest fractional precision accepted in a config.
const MAX_FLOAT_PRECISION: usize = 15;

impl ExerciseConfig {
    /// Load an exercise from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(ExerciseConfig)` - Successfully loaded and validated config
    /// * `Err(GradeError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GradeError::UserError(format!(
                "failed to read exercise file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse an exercise from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ExerciseConfig = serde_yaml::from_str(yaml)
            .map_err(|e| GradeError::UserError(format!("failed to parse exercise YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize the exercise to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            GradeError::UserError(format!("failed to serialize exercise to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every `process.require`/`process.forbid` entry names a known rule
    /// - `result.expected_digest` is 64 lowercase hex characters
    /// - `result.required_columns` has no duplicates
    /// - `result.float_precision` is at most 15
    pub fn validate(&self) -> Result<()> {
        for name in self.process.require.iter().chain(&self.process.forbid) {
            if let Err(e) = ProcessRule::from_str(name) {
                let known: Vec<&str> = ProcessRule::ALL.iter().map(|r| r.as_str()).collect();
                return Err(GradeError::UserError(format!(
                    "exercise validation failed: {}. Known rules: {}",
                    e,
                    known.join(", ")
                )));
            }
        }

        let Some(result) = &self.result else {
            return Ok(());
        };

        let digest = &result.expected_digest;
        if digest.len() != 64 || !digest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(GradeError::UserError(format!(
                "exercise validation failed: expected_digest must be 64 lowercase hex characters (found '{}').\n\
                 Fix: run `sqlgrade fingerprint <reference-result.json>` and paste its output.",
                digest
            )));
        }

        let mut seen = HashSet::new();
        for column in &result.required_columns {
            if !seen.insert(column.as_str()) {
                return Err(GradeError::UserError(format!(
                    "exercise validation failed: required_columns lists '{}' more than once",
                    column
                )));
            }
        }

        if result.float_precision > MAX_FLOAT_PRECISION {
            return Err(GradeError::UserError(format!(
                "exercise validation failed: float_precision must be at most {} (found {})",
                MAX_FLOAT_PRECISION, result.float_precision
            )));
        }

        Ok(())
    }

    /// Checks for this exercise, in evaluation order.
    ///
    /// Statement gate (if `select_only`), then process rules (if any), then
    /// result validation (if configured).
    pub fn validators(&self) -> Vec<Box<dyn Validator>> {
        let mut checks: Vec<Box<dyn Validator>> = Vec::new();
        if self.select_only {
            checks.push(Box::new(ReadOnlyStatement));
        }
        if !self.process.is_empty() {
            checks.push(Box::new(self.process.to_rules()));
        }
        if let Some(result) = &self.result {
            checks.push(Box::new(result.to_validator()));
        }
        checks
    }

    /// Grade a submission. The first failing check's verdict is returned;
    /// a pass carries the messages of every passing check.
    pub fn grade<R: Rng>(&self, query: &str, table: &ResultTable, rng: &mut R) -> Verdict {
        let mut messages = Vec::new();

        for check in self.validators() {
            let verdict = check.check(query, table, &mut *rng);
            if !verdict.passed {
                tracing::debug!(
                    exercise = self.id.as_deref().unwrap_or("<unnamed>"),
                    failure = ?verdict.failure,
                    "submission failed"
                );
                return verdict;
            }
            messages.extend(verdict.messages);
        }

        tracing::debug!(
            exercise = self.id.as_deref().unwrap_or("<unnamed>"),
            "submission passed"
        );
        Verdict::pass(messages)
    }
}
