//! Loan-document loading.
//!
//! An evaluation context is assembled either from one combined JSON
//! document keyed by section name, or from per-section files in a
//! directory. The LOS record is required; the supporting documents
//! (credit report, title, appraisal, drive report) default to empty
//! objects when absent so validators fall through to NOT_APPLICABLE
//! instead of erroring.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use ppv_model::{EvalContext, LOS_SECTION};

use crate::error::IngestError;

/// Supporting-document sections, each optional.
pub const OPTIONAL_SECTIONS: &[&str] = &["credit_report", "title", "appraisal", "drive_report"];

/// Assemble a context from one combined document keyed by section name.
///
/// Unrecognized top-level keys are carried through untouched so custom
/// field-table sections keep working.
pub fn context_from_combined(document: Value) -> Result<EvalContext, IngestError> {
    let Value::Object(map) = document else {
        return Err(IngestError::NotAnObject {
            section: "<combined>".to_string(),
            kind: kind_of(&document).to_string(),
        });
    };
    if !map.contains_key(LOS_SECTION) {
        return Err(IngestError::MissingSection {
            section: LOS_SECTION.to_string(),
        });
    }

    let mut sections = BTreeMap::new();
    for (name, document) in map {
        ensure_object(&name, &document)?;
        sections.insert(name, document);
    }
    for section in OPTIONAL_SECTIONS {
        sections
            .entry((*section).to_string())
            .or_insert_with(empty_object);
    }
    Ok(EvalContext::from_sections(sections))
}

/// Load a combined document from a JSON file.
pub fn load_combined(path: &Path) -> Result<EvalContext, IngestError> {
    let document = read_json(path)?;
    let context = context_from_combined(document)?;
    info!(path = %path.display(), "loaded combined loan document");
    Ok(context)
}

/// Load per-section files `<section>.json` from a directory.
///
/// `los.json` is required; the optional sections are loaded when present
/// and default to empty objects otherwise.
pub fn load_section_dir(dir: &Path) -> Result<EvalContext, IngestError> {
    let los_path = dir.join(format!("{LOS_SECTION}.json"));
    if !los_path.is_file() {
        return Err(IngestError::MissingSection {
            section: LOS_SECTION.to_string(),
        });
    }

    let mut sections = BTreeMap::new();
    let los = read_json(&los_path)?;
    ensure_object(LOS_SECTION, &los)?;
    sections.insert(LOS_SECTION.to_string(), los);

    for section in OPTIONAL_SECTIONS {
        let path = dir.join(format!("{section}.json"));
        let document = if path.is_file() {
            let document = read_json(&path)?;
            ensure_object(section, &document)?;
            document
        } else {
            debug!(section, "section file absent, defaulting to empty object");
            empty_object()
        };
        sections.insert((*section).to_string(), document);
    }
    info!(dir = %dir.display(), "loaded loan documents");
    Ok(EvalContext::from_sections(sections))
}

fn read_json(path: &Path) -> Result<Value, IngestError> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| IngestError::json(path, source))
}

fn ensure_object(section: &str, document: &Value) -> Result<(), IngestError> {
    if document.is_object() {
        Ok(())
    } else {
        Err(IngestError::NotAnObject {
            section: section.to_string(),
            kind: kind_of(document).to_string(),
        })
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn combined_document_fills_optional_sections() {
        let context = context_from_combined(json!({
            "los": {"loan_id": "HML-450321"},
            "credit_report": {"Tradelines": []},
        }))
        .unwrap();
        assert!(context.has_section("los"));
        assert!(context.has_section("credit_report"));
        assert_eq!(context.section("title"), Some(&json!({})));
        assert_eq!(context.section("drive_report"), Some(&json!({})));
    }

    #[test]
    fn combined_document_requires_los() {
        let err = context_from_combined(json!({"title": {}})).unwrap_err();
        assert!(matches!(err, IngestError::MissingSection { .. }));
    }

    #[test]
    fn non_object_section_is_rejected() {
        let err = context_from_combined(json!({"los": [1, 2, 3]})).unwrap_err();
        assert!(matches!(err, IngestError::NotAnObject { .. }));
    }

    #[test]
    fn section_dir_loads_present_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("los.json"),
            r#"{"loan_id": "HML-450321", "ltv": 0.8}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("title.json"),
            r#"{"chain_title_date": "2024-01-15"}"#,
        )
        .unwrap();

        let context = load_section_dir(dir.path()).unwrap();
        assert_eq!(
            context.section("los").and_then(|s| s.get("ltv")),
            Some(&json!(0.8))
        );
        assert_eq!(
            context.section("title").and_then(|s| s.get("chain_title_date")),
            Some(&json!("2024-01-15"))
        );
        assert_eq!(context.section("appraisal"), Some(&json!({})));
    }

    #[test]
    fn section_dir_requires_los_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_section_dir(dir.path()).unwrap_err();
        assert!(matches!(err, IngestError::MissingSection { .. }));
    }
}
