//! Credit profile checks: representative score floor, gift funds, and lien
//! payoff composition.

use serde_json::json;

use ppv_core::{as_f64, is_affirmative, value_to_string};
use ppv_model::{EvalContext, LOS_SECTION, RuleDef, Verdict};

use crate::resolver::FieldResolver;

const CREDIT_SCORE_FLOOR: f64 = 620.0;

/// ALERT when the average representative credit score is at or below the
/// floor; unparseable score is NOT_APPLICABLE.
pub(super) fn credit_score(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let score = resolver.resolve(context, LOS_SECTION, "average_representative_credit_score");
    let details = json!({ "score": score });

    match score.and_then(as_f64) {
        None => Verdict::not_applicable(rule, details),
        Some(value) if value <= CREDIT_SCORE_FLOOR => Verdict::alert(rule, None, details),
        Some(_) => Verdict::pass(rule, details),
    }
}

/// ALERT when any gift amount is present. An unparseable amount reads as
/// zero, i.e. PASS.
pub(super) fn gift(rule: &RuleDef, context: &EvalContext, resolver: &FieldResolver) -> Verdict {
    let gift_amount = resolver.resolve(context, LOS_SECTION, "gift_amount");
    let details = json!({ "gift_amount": gift_amount });

    let amount = gift_amount.and_then(as_f64).unwrap_or(0.0);
    if amount > 0.0 {
        Verdict::alert(rule, None, details)
    } else {
        Verdict::pass(rule, details)
    }
}

/// Only acts when the liabilities are marked to be paid off: ALERT when more
/// than one liability is listed, or when the account type is not a mortgage.
pub(super) fn lien_payoff(
    rule: &RuleDef,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> Verdict {
    let paid_off = resolver.resolve(context, LOS_SECTION, "liabilities_will_be_paid_off");
    let account_type = resolver.resolve(context, LOS_SECTION, "liabilities_account_type");
    let liability_names = resolver.resolve(context, LOS_SECTION, "liabilities_name");
    let details = json!({
        "paid_off": paid_off,
        "account_type": account_type,
        "liabilities_name": liability_names,
    });

    if is_affirmative(paid_off) {
        let count = liability_names
            .map(value_to_string)
            .map_or(0, |names| {
                names
                    .split(',')
                    .filter(|part| !part.trim().is_empty())
                    .count()
            });
        if count > 1 {
            return Verdict::alert(rule, None, details);
        }
        let type_text = account_type.map(value_to_string).unwrap_or_default();
        if !type_text.to_lowercase().contains("mortgage") {
            return Verdict::alert(rule, None, details);
        }
    }
    Verdict::pass(rule, details)
}
