use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::trigger::Trigger;

/// One configured compliance rule.
///
/// Loaded once at engine construction and immutable thereafter. The
/// `validator` name is bound to a concrete implementation when the engine is
/// built, not per evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    /// Unique rule identifier (verdicts are keyed by it).
    pub id: String,
    /// Validator variant name this rule binds to (e.g. `"LTVValidator"`).
    pub validator: String,
    /// Applicability predicate; absent means always applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
    /// Validator-specific parameters.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,
    /// Validator-specific numeric thresholds.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub thresholds: BTreeMap<String, Value>,
    /// Message echoed on ALERT verdicts unless overridden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<String>,
    /// Message echoed on CONDITION verdicts unless overridden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_message: Option<String>,
}

impl RuleDef {
    pub fn new(id: impl Into<String>, validator: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            validator: validator.into(),
            trigger: None,
            params: BTreeMap::new(),
            thresholds: BTreeMap::new(),
            alert_message: None,
            condition_message: None,
        }
    }

    /// Numeric parameter with a default, accepting JSON numbers or numeric
    /// strings.
    pub fn param_f64(&self, name: &str, default: f64) -> f64 {
        self.params
            .get(name)
            .and_then(number_of)
            .unwrap_or(default)
    }

    /// Numeric threshold; absent or non-numeric entries yield `None` so the
    /// validator can skip the comparison.
    pub fn threshold_f64(&self, name: &str) -> Option<f64> {
        self.thresholds.get(name).and_then(number_of)
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_coerce_numbers_and_strings() {
        let mut rule = RuleDef::new("R-001", "DTIValidator");
        rule.params.insert("dti_limit".to_string(), json!("43"));
        assert_eq!(rule.param_f64("dti_limit", 50.0), 43.0);
        assert_eq!(rule.param_f64("missing", 50.0), 50.0);
    }

    #[test]
    fn thresholds_ignore_non_numeric_entries() {
        let mut rule = RuleDef::new("R-002", "LTVValidator");
        rule.thresholds.insert("ltv".to_string(), json!(95));
        rule.thresholds.insert("cltv".to_string(), json!("n/a"));
        assert_eq!(rule.threshold_f64("ltv"), Some(95.0));
        assert_eq!(rule.threshold_f64("cltv"), None);
        assert_eq!(rule.threshold_f64("hcltv"), None);
    }

    #[test]
    fn deserializes_from_config_shape() {
        let rule: RuleDef = serde_json::from_value(json!({
            "id": "PPV-LTV",
            "validator": "LTVValidator",
            "trigger": { "purpose_of_loan": ["Purchase"] },
            "thresholds": { "ltv": 95, "cltv": 95, "hcltv": 95 },
            "alert_message": "LTV exceeds program limit",
        }))
        .unwrap();
        assert_eq!(rule.id, "PPV-LTV");
        assert!(rule.trigger.is_some());
        assert!(rule.condition_message.is_none());
    }
}
