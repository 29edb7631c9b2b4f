//! Rule dispatcher.
//!
//! Binds configured rules to validator implementations once at
//! construction, then evaluates them in load order against read-only
//! contexts. A single evaluation is a pure computation; the engine itself
//! is immutable and may be shared across threads evaluating distinct loans.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;
use tracing::{debug, info, warn};

use ppv_model::{
    ConfigIssue, ConfigReport, EvalContext, FieldTable, IssueSeverity, RuleDef, Verdict,
};

use crate::matcher::trigger_matches;
use crate::resolver::FieldResolver;
use crate::validators::ValidatorKind;

#[derive(Debug, Clone)]
struct BoundRule {
    def: RuleDef,
    kind: ValidatorKind,
}

/// Rule engine evaluating a configured rule set against loan contexts.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<BoundRule>,
    resolver: FieldResolver,
    report: ConfigReport,
}

impl RuleEngine {
    /// Bind a rule set against the registered validators.
    ///
    /// Rules naming an unknown validator are excluded from evaluation — no
    /// verdict will ever be emitted for them — and recorded in the
    /// configuration report, as are duplicate rule ids (first definition
    /// wins).
    pub fn new(rules: Vec<RuleDef>, fields: FieldTable) -> Self {
        let resolver = FieldResolver::new(fields);
        let mut report = ConfigReport::default();
        let mut seen_ids = BTreeSet::new();
        let mut bound = Vec::with_capacity(rules.len());
        for def in rules {
            if !seen_ids.insert(def.id.clone()) {
                warn!(rule_id = %def.id, "duplicate rule id, keeping first definition");
                report.push(ConfigIssue {
                    rule_id: def.id.clone(),
                    severity: IssueSeverity::Error,
                    message: format!("duplicate rule id: {}", def.id),
                });
                continue;
            }
            match ValidatorKind::from_name(&def.validator) {
                Some(kind) => bound.push(BoundRule { def, kind }),
                None => {
                    warn!(
                        rule_id = %def.id,
                        validator = %def.validator,
                        "unknown validator, rule will be skipped"
                    );
                    report.push(ConfigIssue {
                        rule_id: def.id.clone(),
                        severity: IssueSeverity::Warning,
                        message: format!(
                            "unknown validator {} (rule will produce no verdict)",
                            def.validator
                        ),
                    });
                }
            }
        }
        Self {
            rules: bound,
            resolver,
            report,
        }
    }

    /// Findings collected while binding the rule set.
    pub fn config_report(&self) -> &ConfigReport {
        &self.report
    }

    /// The field resolver built from the configured field table.
    pub fn resolver(&self) -> &FieldResolver {
        &self.resolver
    }

    /// Bound rule definitions, in load order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleDef> {
        self.rules.iter().map(|bound| &bound.def)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every bound rule against one context.
    ///
    /// Returns one verdict per bound rule, keyed by rule id. Trigger
    /// mismatch short-circuits a rule to NOT_APPLICABLE without invoking
    /// its validator.
    pub fn evaluate(&self, context: &EvalContext) -> BTreeMap<String, Verdict> {
        let mut verdicts = BTreeMap::new();
        for bound in &self.rules {
            let verdict = if trigger_matches(bound.def.trigger.as_ref(), context, &self.resolver) {
                bound.kind.evaluate(&bound.def, context, &self.resolver)
            } else {
                Verdict::not_applicable(&bound.def, json!({}))
            };
            debug!(
                rule_id = %bound.def.id,
                validator = bound.kind.name(),
                status = verdict.status.as_str(),
                "rule evaluated"
            );
            verdicts.insert(bound.def.id.clone(), verdict);
        }
        info!(rules = self.rules.len(), "evaluation complete");
        verdicts
    }
}
