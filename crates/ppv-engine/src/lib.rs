//! Rule-evaluation engine for loan program and product compliance.
//!
//! The engine takes a rule set and field-path table at construction and
//! evaluates loan contexts into per-rule verdicts: a path-based field
//! resolver decouples rule configuration from document shapes, a trigger
//! matcher decides applicability, and one validator strategy per rule type
//! produces the verdict.

mod engine;
mod matcher;
mod resolver;
mod validators;

pub use engine::RuleEngine;
pub use matcher::trigger_matches;
pub use resolver::FieldResolver;
pub use validators::ValidatorKind;
