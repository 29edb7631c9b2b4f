//! Trigger evaluation against a context.
//!
//! Fields are resolved from the "los" section. Conjunction across clauses,
//! disjunction short-circuit, and any resolution failure counts as a
//! non-match for its clause.

use serde_json::Value;

use ppv_core::{casefold_value, to_percent};
use ppv_model::{EvalContext, Expected, FieldClause, LOS_SECTION, Trigger};

use crate::resolver::FieldResolver;

/// Decide rule applicability. An absent trigger matches unconditionally.
pub fn trigger_matches(
    trigger: Option<&Trigger>,
    context: &EvalContext,
    resolver: &FieldResolver,
) -> bool {
    trigger.is_none_or(|trigger| matches_node(trigger, context, resolver))
}

fn matches_node(trigger: &Trigger, context: &EvalContext, resolver: &FieldResolver) -> bool {
    match trigger {
        Trigger::All(clauses) => clauses
            .iter()
            .all(|clause| matches_clause(clause, context, resolver)),
        Trigger::Any(subs) => subs
            .iter()
            .any(|sub| matches_node(sub, context, resolver)),
    }
}

fn matches_clause(clause: &FieldClause, context: &EvalContext, resolver: &FieldResolver) -> bool {
    let actual = resolver.resolve(context, LOS_SECTION, &clause.field);
    clause
        .expected
        .iter()
        .any(|expected| matches_expected(actual, expected))
}

fn matches_expected(actual: Option<&Value>, expected: &Expected) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    match expected {
        Expected::Literal(text) => {
            casefold_value(Some(actual)) == text.trim().to_lowercase()
        }
        Expected::GreaterThan(bound) => {
            to_percent(actual).is_some_and(|percent| percent > *bound)
        }
    }
}
