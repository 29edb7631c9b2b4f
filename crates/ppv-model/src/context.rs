use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical section name for the primary loan record.
pub const LOS_SECTION: &str = "los";

/// Read-only snapshot of one loan's data plus related documents.
///
/// Maps a section name ("los", "credit_report", "title", "appraisal",
/// "drive_report") to that section's raw document. Built fresh per
/// evaluation; the engine only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvalContext {
    sections: BTreeMap<String, Value>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections(sections: BTreeMap<String, Value>) -> Self {
        Self { sections }
    }

    /// Add or replace a section document.
    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>, document: Value) -> Self {
        self.sections.insert(name.into(), document);
        self
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }
}
