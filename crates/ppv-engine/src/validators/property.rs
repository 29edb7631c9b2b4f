//! Property and program checks: occupancy, unit count, manufactured
//! housing, and amortization type.

use serde_json::json;

use ppv_core::{as_i64, casefold_value, value_to_string};
use ppv_model::{EvalContext, LOS_SECTION, RuleDef, Verdict};

use crate::resolver::FieldResolver;

/// ALERT unless the property will be a primary residence; empty value is
/// NOT_APPLICABLE.
pub(super) fn occupancy(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let property_will_be = resolver.resolve(context, LOS_SECTION, "property_will_be");
    let details = json!({ "property_will_be": property_will_be });

    let folded = casefold_value(property_will_be);
    if folded.is_empty() {
        return Verdict::not_applicable(rule, details);
    }
    if folded != "primary" {
        return Verdict::alert(rule, None, details);
    }
    Verdict::pass(rule, details)
}

/// ALERT unless the unit count is exactly 1; non-integer input is
/// NOT_APPLICABLE.
pub(super) fn second_home(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let no_units = resolver.resolve(context, LOS_SECTION, "no_units");
    let details = json!({ "no_units": no_units });

    match no_units.and_then(as_i64) {
        None => Verdict::not_applicable(rule, details),
        Some(1) => Verdict::pass(rule, details),
        Some(_) => Verdict::alert(rule, None, details),
    }
}

/// ALERT when the loan program detail or property type mentions
/// manufactured housing.
pub(super) fn investment(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let loan_program_detail = resolver.resolve(context, LOS_SECTION, "loan_program_detail");
    let property_type = resolver.resolve(context, LOS_SECTION, "property_type");
    let details = json!({
        "loan_program_detail": loan_program_detail,
        "property_type": property_type,
    });

    let mentions_manufactured = [loan_program_detail, property_type]
        .into_iter()
        .flatten()
        .any(|value| value_to_string(value).to_lowercase().contains("manufactured"));
    if mentions_manufactured {
        Verdict::alert(rule, None, details)
    } else {
        Verdict::pass(rule, details)
    }
}

/// ALERT unless the amortization type is fixed; empty value is
/// NOT_APPLICABLE.
pub(super) fn loan_program(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let amortization_type = resolver.resolve(context, LOS_SECTION, "amortization_type");
    let details = json!({ "amortization_type": amortization_type });

    let folded = casefold_value(amortization_type);
    if folded.is_empty() {
        return Verdict::not_applicable(rule, details);
    }
    if folded != "fixed" && folded != "fixed rate" {
        return Verdict::alert(rule, None, details);
    }
    Verdict::pass(rule, details)
}
