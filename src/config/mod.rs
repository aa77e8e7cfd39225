//! Exercise configuration for sqlgrade.
//!
//! This module defines the `ExerciseConfig` struct that represents one
//! exercise's YAML file: the expected result fingerprint, structural
//! expectations, and process rules. It supports forward-compatible YAML
//! parsing (unknown fields are ignored), sensible defaults for optional
//! fields, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::ExerciseConfig;
pub use types::{ProcessConfig, ResultCheckConfig};
