//! YAML rule-set configuration.
//!
//! A config document carries a `fields:` table mapping (section, logical
//! field name) to a dotted path plus optional default, and a `rules:` list
//! of rule definitions. Field entries accept a plain string as shorthand
//! for a path with no default.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use ppv_model::{FieldSpec, FieldTable, RuleDef};

use crate::error::IngestError;

/// Parsed rule-set configuration, ready to hand to the engine.
#[derive(Debug, Clone)]
pub struct RuleSetConfig {
    pub fields: FieldTable,
    pub rules: Vec<RuleDef>,
}

impl RuleSetConfig {
    /// Load and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let text = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
        let config = Self::from_str(&text, path)?;
        info!(
            path = %path.display(),
            rules = config.rules.len(),
            "loaded rule-set config"
        );
        Ok(config)
    }

    /// Parse config text; `path` is only used in error messages.
    pub fn from_str(text: &str, path: &Path) -> Result<Self, IngestError> {
        let doc: ConfigDoc =
            serde_yaml::from_str(text).map_err(|source| IngestError::yaml(path, source))?;
        doc.validate()?;

        let mut fields = FieldTable::new();
        for (section, table) in doc.fields {
            for (name, raw) in table {
                fields.insert(&section, name, raw.into_spec());
            }
        }
        Ok(Self {
            fields,
            rules: doc.rules,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDoc {
    #[serde(default)]
    fields: BTreeMap<String, BTreeMap<String, RawFieldSpec>>,
    #[serde(default)]
    rules: Vec<RuleDef>,
}

impl ConfigDoc {
    fn validate(&self) -> Result<(), IngestError> {
        if self.rules.is_empty() {
            return Err(IngestError::invalid_config("config defines no rules"));
        }
        for rule in &self.rules {
            if rule.id.trim().is_empty() {
                return Err(IngestError::invalid_config("rule with empty id"));
            }
            if rule.validator.trim().is_empty() {
                return Err(IngestError::invalid_config(format!(
                    "rule {} names no validator",
                    rule.id
                )));
            }
        }
        Ok(())
    }
}

/// A field entry is either a bare dotted path or a full spec.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFieldSpec {
    Path(String),
    Full {
        path: String,
        #[serde(default)]
        default: Option<Value>,
    },
}

impl RawFieldSpec {
    fn into_spec(self) -> FieldSpec {
        match self {
            Self::Path(path) => FieldSpec::new(path),
            Self::Full { path, default } => match default {
                Some(default) => FieldSpec::new(path).with_default(default),
                None => FieldSpec::new(path),
            },
        }
    }
}
