use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use ppv_core::as_f64;
use ppv_engine::FieldResolver;
use ppv_model::{EvalContext, LOS_SECTION, Verdict, VerdictStatus};

const REPORT_SCHEMA: &str = "loan-ppv.disclosure";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Disclosure payload for one evaluated loan.
#[derive(Debug, Serialize)]
pub struct DisclosurePayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub loan_id: Value,
    pub borrower: BorrowerSection,
    pub loan_details: LoanDetails,
    pub alerts: Vec<Finding>,
    pub los_updates: Vec<Finding>,
    pub conditions: Vec<Finding>,
}

#[derive(Debug, Serialize)]
pub struct BorrowerSection {
    /// First, middle, last — entries stay null when the LOS record lacks
    /// them.
    pub names: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct LoanDetails {
    pub application_date: Value,
    pub program: Value,
    pub closing_date: Value,
    pub purchase_price: f64,
    pub loan_amount: f64,
    pub le_due_date: Value,
    pub action_summary: ActionSummary,
}

#[derive(Debug, Serialize)]
pub struct ActionSummary {
    pub total_checks: usize,
    pub alerts_count: usize,
    pub updates_count: usize,
    pub conditions_count: usize,
}

#[derive(Debug, Serialize)]
pub struct Finding {
    pub message: String,
}

/// Assemble the disclosure payload from one evaluation's verdicts.
///
/// Alerts and conditions carry their verdict messages in rule-id order.
/// PASS and NOT_APPLICABLE verdicts contribute nothing beyond the check
/// totals.
pub fn build_disclosure(
    context: &EvalContext,
    resolver: &FieldResolver,
    verdicts: &BTreeMap<String, Verdict>,
) -> DisclosurePayload {
    let field = |name: &str| -> Value {
        resolver
            .resolve(context, LOS_SECTION, name)
            .cloned()
            .unwrap_or(Value::Null)
    };
    let amount = |name: &str| -> f64 {
        resolver
            .resolve(context, LOS_SECTION, name)
            .and_then(as_f64)
            .unwrap_or(0.0)
    };

    let mut alerts = Vec::new();
    let mut conditions = Vec::new();
    for verdict in verdicts.values() {
        match verdict.status {
            VerdictStatus::Alert => alerts.push(Finding {
                message: verdict.message.clone(),
            }),
            VerdictStatus::Condition => conditions.push(Finding {
                message: verdict.message.clone(),
            }),
            VerdictStatus::Pass | VerdictStatus::NotApplicable => {}
        }
    }
    let los_updates: Vec<Finding> = Vec::new();

    let action_summary = ActionSummary {
        total_checks: alerts.len() + los_updates.len() + conditions.len(),
        alerts_count: alerts.len(),
        updates_count: los_updates.len(),
        conditions_count: conditions.len(),
    };

    DisclosurePayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        loan_id: field("loan_id"),
        borrower: BorrowerSection {
            names: vec![
                field("borrower_first_name"),
                field("borrower_middle_name"),
                field("borrower_last_name"),
            ],
        },
        loan_details: LoanDetails {
            application_date: field("application_date"),
            program: field("loan_program"),
            closing_date: field("closing_date"),
            purchase_price: amount("purchase_price"),
            loan_amount: amount("loan_amount"),
            le_due_date: field("le_due_date"),
            action_summary,
        },
        alerts,
        los_updates,
        conditions,
    }
}
