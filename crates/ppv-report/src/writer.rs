use std::path::{Path, PathBuf};

use crate::payload::DisclosurePayload;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write the disclosure payload as pretty-printed JSON.
///
/// The file lands at `<output_dir>/disclosure_ppv.json`; the directory is
/// created when absent.
pub fn write_disclosure_json(
    output_dir: &Path,
    payload: &DisclosurePayload,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let output_path = output_dir.join("disclosure_ppv.json");
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(&output_path, format!("{json}\n")).map_err(|source| ReportError::Io {
        path: output_path.clone(),
        source,
    })?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::build_disclosure;
    use ppv_engine::FieldResolver;
    use ppv_model::{EvalContext, FieldTable, LOS_SECTION};
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn writes_json_file_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let context = EvalContext::new().with_section(LOS_SECTION, json!({}));
        let resolver = FieldResolver::new(FieldTable::new());
        let payload = build_disclosure(&context, &resolver, &BTreeMap::new());

        let path = write_disclosure_json(dir.path(), &payload).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["schema"], json!("loan-ppv.disclosure"));
    }
}
