//! String normalization for comparing addresses and names across
//! formatting noise.

use serde_json::Value;

/// Lowercase, strip characters that are neither alphanumeric nor
/// whitespace, then trim.
pub fn normalize(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    filtered.trim().to_string()
}

/// String form of a raw value; scalars render without JSON quoting,
/// absent/null values as the empty string.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Normalized string form of an optionally resolved value.
pub fn normalize_value(value: Option<&Value>) -> String {
    value.map(value_to_string).map_or_else(String::new, |s| normalize(&s))
}

/// Trimmed, lowercased string form of an optionally resolved value.
///
/// Looser than [`normalize_value`]: interior punctuation survives. Used for
/// token comparisons ("Fixed Rate", trigger literals) where only case and
/// surrounding whitespace are noise.
pub fn casefold_value(value: Option<&Value>) -> String {
    value
        .map(value_to_string)
        .map_or_else(String::new, |s| s.trim().to_lowercase())
}

/// Whether a resolved value is an affirmative token.
pub fn is_affirmative(value: Option<&Value>) -> bool {
    matches!(normalize_value(value).as_str(), "yes" | "y" | "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("123 Main St., Apt #4B"), "123 main st apt 4b");
        assert_eq!(normalize("  ABC Bank  "), "abc bank");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn affirmative_tokens() {
        assert!(is_affirmative(Some(&json!("Yes"))));
        assert!(is_affirmative(Some(&json!(" y "))));
        assert!(is_affirmative(Some(&json!(true))));
        assert!(!is_affirmative(Some(&json!("no"))));
        assert!(!is_affirmative(Some(&json!(null))));
        assert!(!is_affirmative(None));
    }

    #[test]
    fn value_string_forms() {
        assert_eq!(value_to_string(&json!("Primary")), "Primary");
        assert_eq!(value_to_string(&json!(98)), "98");
        assert_eq!(value_to_string(&json!(null)), "");
    }
}
