//! Path-based field resolution.
//!
//! The resolver is the indirection layer between rule configuration and the
//! heterogeneous document shapes in a context: rules name logical fields,
//! the field table maps them to dotted paths per section. Resolution never
//! fails — absence, type mismatches, and present nulls are all "miss" cases
//! that yield the configured default.

use serde_json::Value;

use ppv_model::{EvalContext, FieldTable};

#[derive(Debug, Clone)]
pub struct FieldResolver {
    table: FieldTable,
}

impl FieldResolver {
    pub fn new(table: FieldTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FieldTable {
        &self.table
    }

    /// Resolve a logical field inside one section of the context.
    ///
    /// `None` means no usable value: the field has no path configuration,
    /// or the path missed and the configured default is absent or null.
    pub fn resolve<'a>(
        &'a self,
        context: &'a EvalContext,
        section: &str,
        field: &str,
    ) -> Option<&'a Value> {
        let spec = self.table.spec(section, field)?;
        let resolved = walk(context.section(section), &spec.path);
        // A present null is treated identically to "absent".
        let value = match resolved {
            Some(value) if !value.is_null() => Some(value),
            _ => spec.default.as_ref(),
        };
        value.filter(|value| !value.is_null())
    }
}

fn walk<'a>(root: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    let mut current = root?;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppv_model::FieldSpec;
    use serde_json::json;

    fn resolver() -> FieldResolver {
        let mut table = FieldTable::new();
        table.insert("los", "ltv", FieldSpec::new("ratios.ltv"));
        table.insert(
            "los",
            "no_units",
            FieldSpec::new("property.units").with_default(json!(1)),
        );
        table.insert("los", "gift_amount", FieldSpec::new("gift_amount"));
        FieldResolver::new(table)
    }

    #[test]
    fn walks_dotted_paths() {
        let ctx = EvalContext::new().with_section("los", json!({"ratios": {"ltv": 0.95}}));
        assert_eq!(resolver().resolve(&ctx, "los", "ltv"), Some(&json!(0.95)));
    }

    #[test]
    fn unconfigured_field_is_none() {
        let ctx = EvalContext::new().with_section("los", json!({"dti": 45}));
        assert!(resolver().resolve(&ctx, "los", "dti").is_none());
    }

    #[test]
    fn miss_yields_default() {
        let ctx = EvalContext::new().with_section("los", json!({"property": {}}));
        assert_eq!(resolver().resolve(&ctx, "los", "no_units"), Some(&json!(1)));
    }

    #[test]
    fn non_mapping_intermediate_yields_default() {
        let ctx = EvalContext::new().with_section("los", json!({"property": "condo"}));
        assert_eq!(resolver().resolve(&ctx, "los", "no_units"), Some(&json!(1)));
    }

    #[test]
    fn present_null_is_treated_as_absent() {
        let ctx = EvalContext::new().with_section("los", json!({"property": {"units": null}}));
        assert_eq!(resolver().resolve(&ctx, "los", "no_units"), Some(&json!(1)));

        // Null default on top of a null value stays None.
        let ctx = EvalContext::new().with_section("los", json!({"gift_amount": null}));
        assert!(resolver().resolve(&ctx, "los", "gift_amount").is_none());
    }

    #[test]
    fn missing_section_yields_default() {
        let ctx = EvalContext::new();
        assert_eq!(resolver().resolve(&ctx, "los", "no_units"), Some(&json!(1)));
        assert!(resolver().resolve(&ctx, "los", "ltv").is_none());
    }
}
