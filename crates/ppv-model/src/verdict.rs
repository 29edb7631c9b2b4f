use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::RuleDef;

/// Terminal status of one rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Pass,
    Alert,
    Condition,
    NotApplicable,
}

impl VerdictStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Alert => "ALERT",
            Self::Condition => "CONDITION",
            Self::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

/// Outcome of evaluating one rule against one context.
///
/// `details` is a free-form JSON object capturing the resolved inputs that
/// drove the decision, kept for audit and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub rule_id: String,
    pub status: VerdictStatus,
    pub message: String,
    #[serde(default = "empty_details")]
    pub details: Value,
}

fn empty_details() -> Value {
    Value::Object(serde_json::Map::new())
}

impl Verdict {
    pub fn pass(rule: &RuleDef, details: Value) -> Self {
        Self {
            rule_id: rule.id.clone(),
            status: VerdictStatus::Pass,
            message: String::new(),
            details,
        }
    }

    /// ALERT carrying the rule's configured message unless overridden.
    pub fn alert(rule: &RuleDef, message: Option<&str>, details: Value) -> Self {
        Self {
            rule_id: rule.id.clone(),
            status: VerdictStatus::Alert,
            message: message
                .map(ToString::to_string)
                .or_else(|| rule.alert_message.clone())
                .unwrap_or_default(),
            details,
        }
    }

    /// CONDITION carrying the rule's configured message unless overridden.
    pub fn condition(rule: &RuleDef, message: Option<&str>, details: Value) -> Self {
        Self {
            rule_id: rule.id.clone(),
            status: VerdictStatus::Condition,
            message: message
                .map(ToString::to_string)
                .or_else(|| rule.condition_message.clone())
                .unwrap_or_default(),
            details,
        }
    }

    pub fn not_applicable(rule: &RuleDef, details: Value) -> Self {
        Self {
            rule_id: rule.id.clone(),
            status: VerdictStatus::NotApplicable,
            message: String::new(),
            details,
        }
    }
}
