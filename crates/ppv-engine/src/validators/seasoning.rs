//! Elapsed-time checks: cash-out refinance seasoning against credit-report
//! tradelines, title chain, fraud records, and appraisal prior sale.

use serde_json::{Value, json};

use ppv_core::{fuzzy_ratio, months_between_dates, normalize_value, parse_date, value_to_string};
use ppv_model::{EvalContext, LOS_SECTION, RuleDef, Verdict};

use crate::resolver::FieldResolver;

const DEFAULT_SEASONING_MONTHS: f64 = 6.0;
/// Cash-out refinances need the paid-off mortgage open for more than a year.
const CASHOUT_SEASONING_MONTHS: i64 = 12;
/// Minimum creditor-name similarity to accept a tradeline match.
const CREDITOR_NAME_THRESHOLD: u32 = 70;

const MORTGAGE_NOT_REPORTED: &str =
    "The mortgage being paid off is not reported on the credit report; review the seasoning requirement.";
const SEASONING_NOT_MET: &str =
    "The seasoning requirement for cash-out refinance is not met; review and proceed.";

/// Match the liability being paid off against credit-report tradelines by
/// account-number last-4 and creditor-name similarity, then check months of
/// seasoning between the tradeline open date and the estimated closing.
pub(super) fn cashout_seasoning(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let account_number = resolver.resolve(context, LOS_SECTION, "liabilities_account_number");
    let liability_name = resolver.resolve(context, LOS_SECTION, "liabilities_name");
    let closing_date = resolver.resolve(context, LOS_SECTION, "estimated_closing_date");
    let mut details = json!({
        "liabilities_account_number": account_number,
        "liabilities_name": liability_name,
        "estimated_closing_date": closing_date,
    });

    let Some(tradelines) = tradeline_list(context) else {
        return Verdict::not_applicable(rule, details);
    };

    let last4 = last_four(account_number);
    let mut matched: Option<&Value> = None;
    for tradeline in tradelines {
        let tl_account = tradeline
            .get("Creditor Account Number")
            .or_else(|| tradeline.get("Creditor_Account_Number"));
        let tl_last4 = last_four(tl_account);
        if last4.is_empty() || tl_last4.is_empty() || last4 != tl_last4 {
            continue;
        }
        let creditor_name = tradeline
            .get("Creditor Name")
            .or_else(|| tradeline.get("Creditor_Name"));
        let score = fuzzy_ratio(creditor_name, liability_name);
        details["matched_account_last4"] = json!(tl_last4);
        details["creditor_name"] = json!(creditor_name);
        details["fuzzy_score"] = json!(score);
        if score >= CREDITOR_NAME_THRESHOLD {
            matched = Some(tradeline);
            break;
        }
    }

    let Some(matched) = matched else {
        return Verdict::alert(rule, Some(MORTGAGE_NOT_REPORTED), details);
    };

    let opened = matched.get("Date_Opened").and_then(parse_date);
    let closing = closing_date.and_then(parse_date);
    let (Some(opened), Some(closing)) = (opened, closing) else {
        return Verdict::not_applicable(rule, details);
    };
    if months_between_dates(opened, closing) <= CASHOUT_SEASONING_MONTHS {
        Verdict::alert(rule, Some(SEASONING_NOT_MET), details)
    } else {
        Verdict::pass(rule, details)
    }
}

/// ALERT when the last chain-of-title transfer is within `min_months` of the
/// estimated closing; either date missing or unparseable is NOT_APPLICABLE.
pub(super) fn title(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let chain_date = resolver.resolve(context, "title", "chain_title_date");
    let closing_date = resolver.resolve(context, LOS_SECTION, "estimated_closing_date");
    let details = json!({
        "chain_title_date": chain_date,
        "estimated_closing_date": closing_date,
    });
    let min_months = rule.param_f64("min_months", DEFAULT_SEASONING_MONTHS);
    months_gate(rule, chain_date, closing_date, min_months, details)
}

/// ALERT when the appraisal's prior sale is within `min_months` of the
/// estimated closing; same shape as the title check.
pub(super) fn appraisal_prior_sale(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let prior_sale = resolver.resolve(context, "appraisal", "prior_sale_date");
    let closing_date = resolver.resolve(context, LOS_SECTION, "estimated_closing_date");
    let details = json!({
        "prior_sale_date": prior_sale,
        "estimated_closing_date": closing_date,
    });
    let min_months = rule.param_f64("min_months", DEFAULT_SEASONING_MONTHS);
    months_gate(rule, prior_sale, closing_date, min_months, details)
}

/// Only applicable when the drive-report address matches the subject
/// property address exactly after normalization; then ALERT when a fraud
/// record was filed within `max_months` of the estimated closing.
pub(super) fn fraud(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let drive_street = resolver.resolve(context, "drive_report", "drive_street");
    let drive_city = resolver.resolve(context, "drive_report", "drive_city");
    let drive_state = resolver.resolve(context, "drive_report", "drive_state");
    let drive_unit = resolver.resolve(context, "drive_report", "drive_unit");
    let subject_street = resolver.resolve(context, LOS_SECTION, "urla_lender_subject_street");
    let subject_city = resolver.resolve(context, LOS_SECTION, "urla_lender_subject_city");
    let subject_state = resolver.resolve(context, LOS_SECTION, "urla_lender_subject_state");
    let subject_unit = resolver.resolve(context, LOS_SECTION, "urla_lender_subject_unit");
    let details = json!({
        "drive_addr": {
            "street": drive_street,
            "city": drive_city,
            "state": drive_state,
            "unit": drive_unit,
        },
        "subject_addr": {
            "street": subject_street,
            "city": subject_city,
            "state": subject_state,
            "unit": subject_unit,
        },
    });

    let components = [
        (drive_street, subject_street),
        (drive_city, subject_city),
        (drive_state, subject_state),
        (drive_unit, subject_unit),
    ];
    let address_matches = components
        .into_iter()
        .all(|(drive, subject)| normalize_value(drive) == normalize_value(subject));
    if !address_matches {
        return Verdict::not_applicable(rule, details);
    }

    let fraud_date = resolver.resolve(context, "drive_report", "fraud_recorded_date");
    let closing_date = resolver.resolve(context, LOS_SECTION, "estimated_closing_date");
    let max_months = rule.param_f64("max_months", DEFAULT_SEASONING_MONTHS);
    months_gate(rule, fraud_date, closing_date, max_months, details)
}

/// Shared shape of the elapsed-months checks: both dates required, ALERT
/// when the difference falls short of the bound.
fn months_gate(
    rule: &RuleDef,
    event_date: Option<&Value>,
    closing_date: Option<&Value>,
    bound_months: f64,
    details: Value,
) -> Verdict {
    let event = event_date.and_then(parse_date);
    let closing = closing_date.and_then(parse_date);
    let (Some(event), Some(closing)) = (event, closing) else {
        return Verdict::not_applicable(rule, details);
    };
    let months = months_between_dates(event, closing);
    if (months as f64) < bound_months {
        Verdict::alert(rule, None, details)
    } else {
        Verdict::pass(rule, details)
    }
}

/// Tradelines arrive either as a single mapping or a sequence of mappings.
fn tradeline_list(context: &EvalContext) -> Option<Vec<&Value>> {
    let raw = context.section("credit_report")?.get("Tradelines")?;
    match raw {
        Value::Object(map) if !map.is_empty() => Some(vec![raw]),
        Value::Array(list) if !list.is_empty() => Some(list.iter().collect()),
        _ => None,
    }
}

fn last_four(value: Option<&Value>) -> String {
    let text = value.map(value_to_string).unwrap_or_default();
    let chars: Vec<char> = text.chars().collect();
    let start = chars.len().saturating_sub(4);
    chars[start..].iter().collect()
}
