//! Load-time configuration integrity report.
//!
//! Rules whose validator name has no registered implementation are skipped
//! at evaluation time without a verdict. That leniency is preserved, but the
//! engine records every skip here when it binds the rule set so callers can
//! surface misconfiguration instead of discovering a missing verdict later.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration-integrity finding for one rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigIssue {
    pub rule_id: String,
    pub severity: IssueSeverity,
    pub message: String,
}

/// Findings collected while binding a rule set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigReport {
    pub issues: Vec<ConfigIssue>,
}

impl ConfigReport {
    pub fn push(&mut self, issue: ConfigIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let mut report = ConfigReport::default();
        report.push(ConfigIssue {
            rule_id: "PPV-001".to_string(),
            severity: IssueSeverity::Warning,
            message: "unknown validator: FooValidator".to_string(),
        });
        report.push(ConfigIssue {
            rule_id: "PPV-002".to_string(),
            severity: IssueSeverity::Error,
            message: "duplicate rule id".to_string(),
        });
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.error_count(), 1);
        assert!(report.has_errors());
        assert!(!report.is_clean());
    }
}
