//! Ratio and amount checks: LTV family thresholds, DTI limit, cash-back
//! limits, and income against area median income.

use serde_json::json;

use ppv_core::{as_f64, to_percent};
use ppv_model::{EvalContext, LOS_SECTION, RuleDef, Verdict};

use crate::resolver::FieldResolver;

const DEFAULT_DTI_LIMIT: f64 = 50.0;
const DEFAULT_CASHBACK_ABSOLUTE_LIMIT: f64 = 2000.0;
const DEFAULT_CASHBACK_PERCENT_LIMIT: f64 = 0.01;

/// ALERT when any of ltv/cltv/hcltv exceeds its configured threshold.
pub(super) fn ltv(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let ltv = resolver.resolve(context, LOS_SECTION, "ltv");
    let cltv = resolver.resolve(context, LOS_SECTION, "cltv");
    let hcltv = resolver.resolve(context, LOS_SECTION, "hcltv");
    let details = json!({
        "ltv": ltv,
        "cltv": cltv,
        "hcltv": hcltv,
        "thresholds": &rule.thresholds,
    });

    let exceeded = [("ltv", ltv), ("cltv", cltv), ("hcltv", hcltv)]
        .into_iter()
        .any(|(name, value)| {
            match (value.and_then(to_percent), rule.threshold_f64(name)) {
                (Some(percent), Some(limit)) => percent > limit,
                _ => false,
            }
        });
    if exceeded {
        Verdict::alert(rule, None, details)
    } else {
        Verdict::pass(rule, details)
    }
}

/// ALERT when dti exceeds the configured limit; unparseable dti is
/// NOT_APPLICABLE.
pub(super) fn dti(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let dti = resolver.resolve(context, LOS_SECTION, "dti");
    let limit = rule.param_f64("dti_limit", DEFAULT_DTI_LIMIT);
    let details = json!({ "dti": dti, "limit": limit });

    match dti.and_then(as_f64) {
        None => Verdict::not_applicable(rule, details),
        Some(value) if value > limit => Verdict::alert(rule, None, details),
        Some(_) => Verdict::pass(rule, details),
    }
}

/// ALERT when a negative cash-from/to-borrower amount exceeds the lesser of
/// the absolute limit and `loan_amount * percent_limit`.
pub(super) fn cashback(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let cash_from = resolver.resolve(context, LOS_SECTION, "cash_from_borrower");
    let cash_to = resolver.resolve(context, LOS_SECTION, "cash_to_borrower");
    let loan_amount = resolver.resolve(context, LOS_SECTION, "loan_amount");
    let details = json!({
        "cash_from": cash_from,
        "cash_to": cash_to,
        "loan_amount": loan_amount,
    });

    let Some(loan) = loan_amount.and_then(as_f64) else {
        return Verdict::not_applicable(rule, details);
    };
    let refunds: Vec<f64> = [cash_from, cash_to]
        .into_iter()
        .flatten()
        .filter_map(as_f64)
        .filter(|amount| *amount < 0.0)
        .map(f64::abs)
        .collect();
    if refunds.is_empty() {
        return Verdict::not_applicable(rule, details);
    }
    let absolute_limit = rule.param_f64("absolute_limit", DEFAULT_CASHBACK_ABSOLUTE_LIMIT);
    let percent_limit = rule.param_f64("percent_limit", DEFAULT_CASHBACK_PERCENT_LIMIT);
    let max_allowed = absolute_limit.min(loan * percent_limit);
    if refunds.iter().any(|amount| *amount > max_allowed) {
        Verdict::alert(rule, None, details)
    } else {
        Verdict::pass(rule, details)
    }
}

/// ALERT when total income exceeds the area median income; either value
/// unparseable is NOT_APPLICABLE. AMI falls back to a rule parameter when
/// the LOS record carries none.
pub(super) fn income(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let income = resolver.resolve(context, LOS_SECTION, "total_income");
    let ami = resolver
        .resolve(context, LOS_SECTION, "area_median_income")
        .or_else(|| rule.params.get("area_median_income"));
    let details = json!({ "total_income": income, "area_median_income": ami });

    match (income.and_then(as_f64), ami.and_then(as_f64)) {
        (Some(income), Some(ami)) if income > ami => Verdict::alert(rule, None, details),
        (Some(_), Some(_)) => Verdict::pass(rule, details),
        _ => Verdict::not_applicable(rule, details),
    }
}
