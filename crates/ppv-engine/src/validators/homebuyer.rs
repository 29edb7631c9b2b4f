//! First-time homebuyer program checks: education certificate and the
//! high-LTV education requirement.

use serde_json::json;

use ppv_core::{is_affirmative, to_percent};
use ppv_model::{EvalContext, LOS_SECTION, RuleDef, Verdict};

use crate::resolver::FieldResolver;

const DEFAULT_MAX_LTV: f64 = 95.0;

/// PASS when the homebuyer education certificate is affirmative, else
/// CONDITION.
pub(super) fn program(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let certificate = resolver.resolve(context, LOS_SECTION, "homebuyer_education_certificate");
    let details = json!({ "homebuyer_education_certificate": certificate });

    if is_affirmative(certificate) {
        Verdict::pass(rule, details)
    } else {
        Verdict::condition(rule, None, details)
    }
}

/// Above `max_ltv`, the education certificate becomes a condition; at or
/// below it the rule passes. Unparseable ltv is NOT_APPLICABLE.
pub(super) fn ltv_education(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let ltv = resolver.resolve(context, LOS_SECTION, "ltv");
    let certificate = resolver.resolve(context, LOS_SECTION, "homebuyer_education_certificate");
    let details = json!({
        "ltv": ltv,
        "homebuyer_education_certificate": certificate,
    });

    let Some(percent) = ltv.and_then(to_percent) else {
        return Verdict::not_applicable(rule, details);
    };
    let max_ltv = rule.param_f64("max_ltv", DEFAULT_MAX_LTV);
    if percent > max_ltv && !is_affirmative(certificate) {
        return Verdict::condition(rule, None, details);
    }
    Verdict::pass(rule, details)
}
