//! ExerciseConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a single graded exercise.
///
/// ```yaml
/// id: ex-03-cheap-products
/// select_only: true
/// process:
///   require: [where]
///   forbid: [limit]
/// result:
///   expected_digest: 3f1c...e9
///   required_columns: [name, price]
///   expected_row_count: 4
/// ```
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    /// Exercise identifier, used in logs and reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Only grade SELECT/WITH statements.
    #[serde(default = "default_true")]
    pub select_only: bool,

    /// Required and forbidden SQL constructs.
    #[serde(default)]
    pub process: ProcessConfig,

    /// Expected result. When absent only the query text is checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultCheckConfig>,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            id: None,
            select_only: default_true(),
            process: ProcessConfig::default(),
            result: None,
        }
    }
}
