//! Dispatcher behavior: trigger gating, binding diagnostics, and the
//! stability of repeated evaluation.

mod common;

use serde_json::json;

use ppv_engine::RuleEngine;
use ppv_model::{EvalContext, IssueSeverity, RuleDef, Trigger, VerdictStatus};

use crate::common::field_table;

fn los(doc: serde_json::Value) -> EvalContext {
    EvalContext::new().with_section("los", doc)
}

fn dti_rule(id: &str) -> RuleDef {
    let mut rule = RuleDef::new(id, "DTIValidator");
    rule.alert_message = Some("DTI exceeds program limit".to_string());
    rule
}

fn trigger(value: serde_json::Value) -> Trigger {
    Trigger::from_value(&value).expect("valid trigger")
}

#[test]
fn rule_without_trigger_always_runs() {
    let engine = RuleEngine::new(vec![dti_rule("PPV-DTI")], field_table());
    let verdicts = engine.evaluate(&los(json!({"dti": 55})));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::Alert);
}

#[test]
fn trigger_mismatch_yields_not_applicable_without_running_validator() {
    let mut rule = dti_rule("PPV-DTI");
    rule.trigger = Some(trigger(json!({"purpose_of_loan": ["Cash-Out Refinance"]})));
    let engine = RuleEngine::new(vec![rule], field_table());

    // DTI is over the limit, but the rule is not applicable to purchases.
    let verdicts = engine.evaluate(&los(json!({
        "purpose_of_loan": "Purchase",
        "dti": 55,
    })));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::NotApplicable);
    assert!(verdicts["PPV-DTI"].message.is_empty());
}

#[test]
fn trigger_match_is_case_insensitive() {
    let mut rule = dti_rule("PPV-DTI");
    rule.trigger = Some(trigger(json!({"purpose_of_loan": ["Cash-Out Refinance"]})));
    let engine = RuleEngine::new(vec![rule], field_table());

    let verdicts = engine.evaluate(&los(json!({
        "purpose_of_loan": "cash-out refinance",
        "dti": 55,
    })));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::Alert);
}

#[test]
fn greater_than_trigger_scales_fractional_ratios() {
    let mut rule = dti_rule("PPV-DTI");
    rule.trigger = Some(trigger(json!({"ltv": ["GT90"]})));
    let engine = RuleEngine::new(vec![rule], field_table());

    let verdicts = engine.evaluate(&los(json!({"ltv": 0.95, "dti": 55})));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::Alert);

    let verdicts = engine.evaluate(&los(json!({"ltv": 85, "dti": 55})));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::NotApplicable);
}

#[test]
fn disjunctive_trigger_matches_any_branch() {
    let mut rule = dti_rule("PPV-DTI");
    rule.trigger = Some(trigger(json!({
        "or": [
            {"investor": ["Fannie Mae"]},
            {"investor": ["Freddie Mac"]},
        ]
    })));
    let engine = RuleEngine::new(vec![rule], field_table());

    let verdicts = engine.evaluate(&los(json!({"investor": "Freddie Mac", "dti": 55})));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::Alert);

    let verdicts = engine.evaluate(&los(json!({"investor": "Ginnie Mae", "dti": 55})));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::NotApplicable);
}

#[test]
fn unknown_validator_is_skipped_and_reported() {
    let rules = vec![dti_rule("PPV-DTI"), RuleDef::new("PPV-BAD", "NoSuchValidator")];
    let engine = RuleEngine::new(rules, field_table());

    assert_eq!(engine.len(), 1);
    let report = engine.config_report();
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());

    // No verdict is ever produced for the skipped rule.
    let verdicts = engine.evaluate(&los(json!({"dti": 45})));
    assert!(verdicts.contains_key("PPV-DTI"));
    assert!(!verdicts.contains_key("PPV-BAD"));
}

#[test]
fn duplicate_rule_id_keeps_first_definition() {
    let first = dti_rule("PPV-DTI");
    let mut second = dti_rule("PPV-DTI");
    second.params.insert("dti_limit".to_string(), json!(10));
    let engine = RuleEngine::new(vec![first, second], field_table());

    assert_eq!(engine.len(), 1);
    let report = engine.config_report();
    assert_eq!(report.error_count(), 1);
    assert!(report.has_errors());

    // The first definition's default limit of 50 applies, not 10.
    let verdicts = engine.evaluate(&los(json!({"dti": 45})));
    assert_eq!(verdicts["PPV-DTI"].status, VerdictStatus::Pass);
}

#[test]
fn evaluation_is_deterministic() {
    let mut gated = dti_rule("PPV-DTI");
    gated.trigger = Some(trigger(json!({"purpose_of_loan": ["Purchase"]})));
    let rules = vec![
        gated,
        RuleDef::new("PPV-GIFT", "GiftValidator"),
        RuleDef::new("PPV-OCC", "OccupancyValidator"),
    ];
    let engine = RuleEngine::new(rules, field_table());
    let ctx = los(json!({
        "purpose_of_loan": "Purchase",
        "dti": 38,
        "gift_amount": 7500,
        "property_will_be": "Primary",
    }));

    let first = serde_json::to_value(engine.evaluate(&ctx)).unwrap();
    let second = serde_json::to_value(engine.evaluate(&ctx)).unwrap();
    assert_eq!(first, second);

    assert_eq!(first["PPV-DTI"]["status"], json!("PASS"));
    assert_eq!(first["PPV-GIFT"]["status"], json!("ALERT"));
    assert_eq!(first["PPV-OCC"]["status"], json!("PASS"));
}
