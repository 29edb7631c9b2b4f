pub mod context;
pub mod fields;
pub mod integrity;
pub mod rule;
pub mod trigger;
pub mod verdict;

pub use context::{EvalContext, LOS_SECTION};
pub use fields::{FieldSpec, FieldTable};
pub use integrity::{ConfigIssue, ConfigReport, IssueSeverity};
pub use rule::RuleDef;
pub use trigger::{Expected, FieldClause, Trigger, TriggerError};
pub use verdict::{Verdict, VerdictStatus};
