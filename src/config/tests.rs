//! Tests for exercise configuration.

use crate::canonical::CanonicalOptions;
use crate::config::{ExerciseConfig, ProcessConfig, ResultCheckConfig};
use crate::fingerprint::fingerprint;
use crate::table::{ResultTable, Value};
use crate::validate::{FailureKind, SUCCESS_MESSAGES, WRONG_COLUMNS_MESSAGE, build_validator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tempfile::NamedTempFile;

fn cities() -> ResultTable {
    ResultTable::from_positional(
        ["city", "population"],
        vec![
            vec![Value::from("Lyon"), Value::from(522_250)],
            vec![Value::from("Nice"), Value::from(342_669)],
        ],
    )
    .unwrap()
}

fn cities_digest() -> String {
    fingerprint(&cities(), &CanonicalOptions::default()).digest
}

fn exercise_yaml() -> String {
    format!(
        r#"
id: ex-07
process:
  require: [where]
  forbid: [limit]
result:
  expected_digest: "{}"
  required_columns: [city, population]
  expected_row_count: 2
"#,
        cities_digest()
    )
}

fn grade(config: &ExerciseConfig, query: &str) -> crate::validate::Verdict {
    let mut rng = StdRng::seed_from_u64(3);
    config.grade(query, &cities(), &mut rng)
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_default_config() {
    let config = ExerciseConfig::default();

    assert_eq!(config.id, None);
    assert!(config.select_only);
    assert!(config.process.is_empty());
    assert!(config.result.is_none());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = ExerciseConfig::from_yaml("").unwrap();
    assert_eq!(config, ExerciseConfig::default());
}

#[test]
fn test_parse_full_yaml() {
    let config = ExerciseConfig::from_yaml(&exercise_yaml()).unwrap();

    assert_eq!(config.id.as_deref(), Some("ex-07"));
    assert_eq!(config.process.require, vec!["where".to_string()]);
    assert_eq!(config.process.forbid, vec!["limit".to_string()]);

    let result = config.result.unwrap();
    assert_eq!(result.expected_digest, cities_digest());
    assert_eq!(result.required_columns, vec!["city", "population"]);
    assert_eq!(result.expected_row_count, Some(2));
    // Unspecified values use defaults.
    assert!(result.sort_rows);
    assert!(!result.sort_columns);
    assert!(result.normalize_whitespace);
    assert_eq!(result.null_token, "<NA>");
    assert_eq!(result.float_precision, 2);
    assert!(result.hide_missing_columns);
    assert!(!result.hide_row_count);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
title: Cheap products
hint_md: "Try a WHERE clause"
select_only: false
"#;
    let config = ExerciseConfig::from_yaml(yaml).unwrap();
    assert!(!config.select_only);
}

#[test]
fn test_invalid_yaml() {
    let err = ExerciseConfig::from_yaml("process: [not, a, map]").unwrap_err();
    assert!(err.to_string().contains("failed to parse exercise YAML"));
}

#[test]
fn test_yaml_round_trip() {
    let config = ExerciseConfig::from_yaml(&exercise_yaml()).unwrap();
    let yaml = config.to_yaml().unwrap();
    assert_eq!(ExerciseConfig::from_yaml(&yaml).unwrap(), config);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn test_unknown_rule_rejected() {
    let err = ExerciseConfig::from_yaml("process:\n  forbid: [union]\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unknown process rule 'union'"));
    assert!(msg.contains("group_by"));
}

#[test]
fn test_bad_digest_rejected() {
    let err = ExerciseConfig::from_yaml("result:\n  expected_digest: abc\n").unwrap_err();
    assert!(err.to_string().contains("64 lowercase hex characters"));

    let upper = cities_digest().to_uppercase();
    let yaml = format!("result:\n  expected_digest: {}\n", upper);
    assert!(ExerciseConfig::from_yaml(&yaml).is_err());
}

#[test]
fn test_duplicate_required_columns_rejected() {
    let yaml = format!(
        "result:\n  expected_digest: {}\n  required_columns: [a, b, a]\n",
        cities_digest()
    );
    let err = ExerciseConfig::from_yaml(&yaml).unwrap_err();
    assert!(err.to_string().contains("'a' more than once"));
}

#[test]
fn test_excessive_precision_rejected() {
    let yaml = format!(
        "result:\n  expected_digest: {}\n  float_precision: 40\n",
        cities_digest()
    );
    assert!(ExerciseConfig::from_yaml(&yaml).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(exercise_yaml().as_bytes()).unwrap();

    let config = ExerciseConfig::load(file.path()).unwrap();
    assert_eq!(config.id.as_deref(), Some("ex-07"));
}

#[test]
fn test_load_missing_file() {
    let err = ExerciseConfig::load("/nonexistent/exercise.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read exercise file"));
}

// =========================================================================
// Conversion
// =========================================================================

#[test]
fn test_result_config_to_validator() {
    let result = ResultCheckConfig {
        expected_digest: cities_digest(),
        required_columns: vec!["city".to_string()],
        expected_row_count: Some(2),
        sort_columns: true,
        float_precision: 3,
        hide_row_count: true,
        ..ResultCheckConfig::default()
    };

    let expected = build_validator(cities_digest())
        .required_columns(["city"])
        .expected_row_count(Some(2))
        .hide_row_count(true)
        .canonical_options(CanonicalOptions {
            sort_columns: true,
            float_precision: 3,
            ..CanonicalOptions::default()
        });
    assert_eq!(result.to_validator(), expected);
}

#[test]
fn test_process_config_to_rules() {
    let process = ProcessConfig {
        require: vec!["join".to_string()],
        forbid: vec![],
    };
    let rules = process.to_rules();
    assert_eq!(rules.require, vec!["join".to_string()]);
    assert!(rules.forbid.is_empty());
}

// =========================================================================
// Grading
// =========================================================================

#[test]
fn test_grade_passes() {
    let config = ExerciseConfig::from_yaml(&exercise_yaml()).unwrap();
    let v = grade(&config, "SELECT city, population FROM cities WHERE country = 'FR'");

    assert!(v.passed);
    assert_eq!(v.messages.len(), 1);
    assert!(SUCCESS_MESSAGES.contains(&v.messages[0].as_str()));
}

#[test]
fn test_grade_statement_gate_runs_first() {
    let config = ExerciseConfig::from_yaml(&exercise_yaml()).unwrap();
    let v = grade(&config, "DELETE FROM cities WHERE 1 = 1");
    assert_eq!(v.failure, Some(FailureKind::Statement));
}

#[test]
fn test_grade_statement_gate_can_be_disabled() {
    let config = ExerciseConfig {
        select_only: false,
        ..ExerciseConfig::default()
    };
    let v = grade(&config, "PRAGMA table_info(cities)");
    assert!(v.passed);
    assert!(v.messages.is_empty());
}

#[test]
fn test_grade_process_before_result() {
    let config = ExerciseConfig::from_yaml(&exercise_yaml()).unwrap();
    // The result table matches, but the query has no WHERE.
    let v = grade(&config, "SELECT city, population FROM cities");
    assert_eq!(v.failure, Some(FailureKind::Process));
    assert_eq!(v.messages, vec!["Use a WHERE clause.".to_string()]);
}

#[test]
fn test_grade_structural_failure() {
    let mut config = ExerciseConfig::from_yaml(&exercise_yaml()).unwrap();
    if let Some(result) = config.result.as_mut() {
        result.required_columns.push("country".to_string());
    }

    let v = grade(&config, "SELECT city, population FROM cities WHERE 1 = 1");
    assert_eq!(v.failure, Some(FailureKind::Structure));
    assert_eq!(v.messages, vec![WRONG_COLUMNS_MESSAGE.to_string()]);
}

#[test]
fn test_grade_unknown_rule_surfaces_as_configuration() {
    // Bypasses `validate` by constructing the struct directly.
    let config = ExerciseConfig {
        process: ProcessConfig {
            require: vec!["pivot".to_string()],
            forbid: vec![],
        },
        ..ExerciseConfig::default()
    };
    let v = grade(&config, "SELECT 1");
    assert_eq!(v.failure, Some(FailureKind::Configuration));
}

#[test]
fn test_grade_rules_only() {
    let config = ExerciseConfig::from_yaml("process:\n  require: [group_by]\n").unwrap();
    assert!(grade(&config, "SELECT a, count(*) FROM t GROUP BY a").passed);
    assert!(!grade(&config, "SELECT a FROM t").passed);
}

#[test]
fn test_validators_order() {
    let config = ExerciseConfig::from_yaml(&exercise_yaml()).unwrap();
    assert_eq!(config.validators().len(), 3);

    let bare = ExerciseConfig {
        select_only: false,
        ..ExerciseConfig::default()
    };
    assert!(bare.validators().is_empty());
}
