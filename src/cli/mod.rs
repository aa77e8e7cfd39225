//! CLI argument parsing for sqlgrade.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sqlgrade: grade SQL exercise submissions.
///
/// Result tables are JSON documents of the form
/// `{"columns": [...], "rows": [...]}`; exercises are YAML files holding the
/// expected fingerprint and process rules.
#[derive(Parser, Debug)]
#[command(name = "sqlgrade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for sqlgrade.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the fingerprint of a result table.
    ///
    /// Use this on the reference answer's result to obtain an exercise's
    /// `expected_digest`.
    Fingerprint(FingerprintArgs),

    /// Print the canonical CSV encoding of a result table.
    ///
    /// This is exactly the text that gets hashed by `fingerprint`.
    Canonical(CanonicalArgs),

    /// Grade a submission against an exercise file.
    ///
    /// Runs the statement gate, process rules, and result validation.
    /// Exits 2 when the submission does not pass.
    Check(CheckArgs),

    /// Check only the process rules of a query.
    ///
    /// Exits 2 when a rule is violated, 1 for unknown rule names.
    Rules(RulesArgs),
}

/// Canonicalization flags shared by `fingerprint` and `canonical`.
#[derive(Args, Debug, Clone)]
pub struct CanonicalFlags {
    /// Keep the rows in query order instead of sorting them.
    #[arg(long)]
    pub no_sort_rows: bool,

    /// Sort columns alphabetically by name.
    #[arg(long)]
    pub sort_columns: bool,

    /// Do not collapse whitespace in text cells.
    #[arg(long)]
    pub keep_whitespace: bool,

    /// Token used for null cells.
    #[arg(long, default_value = sqlgrade::canonical::DEFAULT_NULL_TOKEN)]
    pub null_token: String,

    /// Fractional digits kept for numeric cells.
    #[arg(long, default_value_t = sqlgrade::canonical::DEFAULT_FLOAT_PRECISION)]
    pub precision: usize,
}

/// Query text, from a file or inline.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct QuerySource {
    /// File containing the query text ("-" reads stdin).
    #[arg(short, long)]
    pub query: Option<PathBuf>,

    /// Query text given inline.
    #[arg(long)]
    pub sql: Option<String>,
}

/// Arguments for the `fingerprint` command.
#[derive(Parser, Debug)]
pub struct FingerprintArgs {
    /// Result table JSON file.
    pub table: PathBuf,

    #[command(flatten)]
    pub canonical: CanonicalFlags,

    /// Print the digest and metadata as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `canonical` command.
#[derive(Parser, Debug)]
pub struct CanonicalArgs {
    /// Result table JSON file.
    pub table: PathBuf,

    #[command(flatten)]
    pub canonical: CanonicalFlags,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Exercise YAML file.
    pub exercise: PathBuf,

    /// Result table JSON file produced by running the query.
    #[arg(short, long)]
    pub result: PathBuf,

    #[command(flatten)]
    pub source: QuerySource,

    /// Print the verdict as JSON.
    #[arg(long)]
    pub json: bool,

    /// Seed for the success-message choice.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    #[command(flatten)]
    pub source: QuerySource,

    /// Constructs the query must use.
    #[arg(long, value_delimiter = ',')]
    pub require: Vec<String>,

    /// Constructs the query must not use.
    #[arg(long, value_delimiter = ',')]
    pub forbid: Vec<String>,

    /// Print the verdict as JSON.
    #[arg(long)]
    pub json: bool,
}
