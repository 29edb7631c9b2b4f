use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Location of one logical field inside a section document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Dotted path into the section's raw document (e.g. `"borrower.ltv"`).
    pub path: String,
    /// Value substituted when the path is absent or resolves to null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// The indirection table mapping (section, logical field name) to a concrete
/// dotted location plus default.
///
/// Loaded once at engine construction and immutable thereafter, which lets
/// rules refer to logical field names independent of document schemas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTable {
    sections: BTreeMap<String, BTreeMap<String, FieldSpec>>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        section: impl Into<String>,
        field: impl Into<String>,
        spec: FieldSpec,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(field.into(), spec);
    }

    pub fn spec(&self, section: &str, field: &str) -> Option<&FieldSpec> {
        self.sections.get(section)?.get(field)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
