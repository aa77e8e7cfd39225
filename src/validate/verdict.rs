//! Verdicts returned by every validation call.

use serde::Serialize;

/// Why a verdict failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The exercise itself is misconfigured (e.g. an unknown rule name).
    Configuration,
    /// The query is not a gradeable statement.
    Statement,
    /// A required construct is missing or a forbidden one is present.
    Process,
    /// Missing/extra columns or a wrong row count.
    Structure,
    /// The result's fingerprint does not match the expected one.
    Content,
}

impl FailureKind {
    /// Whether the learner can fix this by changing their query.
    pub fn is_learner_facing(self) -> bool {
        !matches!(self, FailureKind::Configuration)
    }
}

/// Pass/fail result plus user-facing messages.
///
/// Created fresh on every validation call and handed to the caller for
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub messages: Vec<String>,
    /// Set exactly when `passed` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl Verdict {
    /// Create a passing verdict.
    pub fn pass(messages: Vec<String>) -> Self {
        Self {
            passed: true,
            messages,
            failure: None,
        }
    }

    /// Create a failing verdict with a single message.
    pub fn fail(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            passed: false,
            messages: vec![message.into()],
            failure: Some(kind),
        }
    }

    /// Format the verdict as a short human-readable report.
    ///
    /// ```text
    /// PASS  👏 Nice!
    /// FAIL  The result is not correct yet. Make corrections and try again.
    /// ```
    pub fn format_report(&self) -> String {
        let status = if self.passed { "PASS" } else { "FAIL" };
        if self.messages.is_empty() {
            status.to_string()
        } else {
            format!("{}  {}", status, self.messages.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_has_no_failure_kind() {
        let v = Verdict::pass(vec![]);
        assert!(v.passed);
        assert!(v.messages.is_empty());
        assert_eq!(v.failure, None);
    }

    #[test]
    fn fail_carries_one_message() {
        let v = Verdict::fail(FailureKind::Content, "nope");
        assert!(!v.passed);
        assert_eq!(v.messages, vec!["nope".to_string()]);
        assert_eq!(v.failure, Some(FailureKind::Content));
    }

    #[test]
    fn report_formatting() {
        assert_eq!(Verdict::pass(vec![]).format_report(), "PASS");
        assert_eq!(
            Verdict::pass(vec!["Nice".to_string()]).format_report(),
            "PASS  Nice"
        );
        assert_eq!(
            Verdict::fail(FailureKind::Structure, "Wrong rows").format_report(),
            "FAIL  Wrong rows"
        );
    }

    #[test]
    fn configuration_is_not_learner_facing() {
        assert!(!FailureKind::Configuration.is_learner_facing());
        assert!(FailureKind::Content.is_learner_facing());
        assert!(FailureKind::Process.is_learner_facing());
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Verdict::fail(FailureKind::Process, "x")).unwrap();
        assert_eq!(json["passed"], false);
        assert_eq!(json["failure"], "process");

        let json = serde_json::to_value(Verdict::pass(vec![])).unwrap();
        assert!(json.get("failure").is_none());
    }
}
