//! End-to-end tests against the shipped rule-set config.

use std::path::PathBuf;

use serde_json::{Value, json};

use ppv_engine::RuleEngine;
use ppv_ingest::{RuleSetConfig, context_from_combined};
use ppv_model::VerdictStatus;
use ppv_report::{build_disclosure, write_disclosure_json};

fn shipped_config() -> RuleSetConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/ppv.yaml");
    RuleSetConfig::from_path(&path).expect("shipped config loads")
}

fn cash_out_loan() -> Value {
    json!({
        "los": {
            "loan_id": "HML-450321",
            "borrower": {"first_name": "Ana", "last_name": "Reyes"},
            "dates": {
                "application_date": "2025-04-01",
                "closing_date": "2025-06-15",
                "estimated_closing_date": "2025-06-15",
                "le_due_date": "2025-04-04",
            },
            "terms": {
                "purpose_of_loan": "Cash-Out Refinance",
                "investor": "Fannie Mae",
                "loan_program": "Conventional",
                "loan_program_detail": "Conv 30yr Fixed",
                "amortization_type": "Fixed",
                "loan_amount": 300_000,
                "purchase_price": 0,
            },
            "ratios": {"ltv": 0.65, "cltv": 0.65, "hcltv": 0.65, "dti": 42},
            "property": {
                "occupancy": "Primary",
                "type": "SFR",
                "no_units": 1,
                "address": {"street": "123 Main St", "city": "Austin", "state": "TX"},
            },
            "credit": {"average_representative_score": 742},
            "closing": {"cash_from_borrower": 1200, "cash_to_borrower": 0},
            "income": {"total_income": 98_000},
            "liabilities": {
                "account_number": "1234567890",
                "name": "ABC BANK",
                "account_type": "First Mortgage",
                "will_be_paid_off": "Yes",
            },
        },
        "credit_report": {
            "Tradelines": [
                {
                    "Creditor Account Number": "XX7890",
                    "Creditor Name": "ABC Bank",
                    "Date_Opened": "2020-03-01",
                },
            ]
        },
        "title": {
            "chain_of_title": {"last_transfer_date": "2019-05-01"},
        },
    })
}

#[test]
fn shipped_config_binds_cleanly() {
    let config = shipped_config();
    let engine = RuleEngine::new(config.rules, config.fields);
    assert!(engine.config_report().is_clean());
    assert_eq!(engine.len(), 17);
}

#[test]
fn clean_cash_out_loan_raises_no_findings() {
    let config = shipped_config();
    let engine = RuleEngine::new(config.rules, config.fields);
    let context = context_from_combined(cash_out_loan()).unwrap();
    let verdicts = engine.evaluate(&context);

    assert_eq!(verdicts.len(), 17);
    // Cash-out rules run and pass on a seasoned, single-lien loan.
    assert_eq!(verdicts["PPV-CSH-001"].status, VerdictStatus::Pass);
    assert_eq!(verdicts["PPV-LIEN-001"].status, VerdictStatus::Pass);
    assert_eq!(verdicts["PPV-DTI-001"].status, VerdictStatus::Pass);
    // Purchase-only rules are gated off by the trigger.
    assert_eq!(verdicts["PPV-LTV-001"].status, VerdictStatus::NotApplicable);
    assert_eq!(verdicts["PPV-GIFT-001"].status, VerdictStatus::NotApplicable);
    // No supporting drive report means the fraud check cannot apply.
    assert_eq!(verdicts["PPV-FRAUD-001"].status, VerdictStatus::NotApplicable);

    assert!(
        verdicts
            .values()
            .all(|verdict| verdict.status != VerdictStatus::Alert)
    );
}

#[test]
fn over_limit_dti_flows_into_the_disclosure_report() {
    let config = shipped_config();
    let engine = RuleEngine::new(config.rules, config.fields);

    let mut loan = cash_out_loan();
    loan["los"]["ratios"]["dti"] = json!(55);
    let context = context_from_combined(loan).unwrap();
    let verdicts = engine.evaluate(&context);
    assert_eq!(verdicts["PPV-DTI-001"].status, VerdictStatus::Alert);

    let payload = build_disclosure(&context, engine.resolver(), &verdicts);
    assert_eq!(payload.loan_id, json!("HML-450321"));
    assert_eq!(payload.loan_details.action_summary.alerts_count, 1);
    assert_eq!(payload.loan_details.action_summary.total_checks, 1);
    assert_eq!(
        payload.alerts[0].message,
        "DTI exceeds the program limit of 50%."
    );

    let dir = tempfile::tempdir().unwrap();
    let path = write_disclosure_json(dir.path(), &payload).unwrap();
    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["loan_details"]["action_summary"]["alerts_count"], json!(1));
}
