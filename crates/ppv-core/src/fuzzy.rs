//! Fuzzy string similarity for creditor-name matching.
//!
//! Scores are 0-100 integers. The engine's thresholds are calibrated
//! against the token-set variant, which is order-insensitive over word
//! tokens; [`sequence_ratio`] is the simple character-sequence alternative
//! for callers that need positional comparison.

use std::collections::BTreeSet;

use rapidfuzz::distance::{indel, lcs_seq};
use serde_json::Value;

use crate::text::{normalize, value_to_string};

/// Token-set similarity between two strings, 0-100.
///
/// Both sides are normalized and split into unique word tokens; the score is
/// the best Indel ratio among the sorted intersection and each side's
/// remainder, so token order and duplicates do not matter. A full token
/// subset scores 100.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);
    let tokens_a: BTreeSet<&str> = norm_a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = norm_b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    // One side's tokens contained in the other's is a perfect set match.
    if !intersection.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100;
    }

    let base = intersection.join(" ");
    let combined_a = join_tokens(&base, &only_a);
    let combined_b = join_tokens(&base, &only_b);

    let best = ratio(&base, &combined_a)
        .max(ratio(&base, &combined_b))
        .max(ratio(&combined_a, &combined_b));
    best.round() as u32
}

/// Character-sequence similarity between two strings, 0-100, based on the
/// longest common subsequence.
pub fn sequence_ratio(a: &str, b: &str) -> u32 {
    (lcs_seq::normalized_similarity(a.chars(), b.chars()) * 100.0).round() as u32
}

/// Token-set similarity between two optionally resolved values; absent or
/// null on either side scores 0.
pub fn fuzzy_ratio(a: Option<&Value>, b: Option<&Value>) -> u32 {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_null() && !b.is_null() => {
            token_set_ratio(&value_to_string(a), &value_to_string(b))
        }
        _ => 0,
    }
}

fn ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

fn join_tokens(base: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return rest.join(" ");
    }
    format!("{base} {}", rest.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_names_score_100() {
        assert_eq!(token_set_ratio("ABC Bank", "abc bank"), 100);
    }

    #[test]
    fn token_order_is_irrelevant() {
        assert_eq!(token_set_ratio("Bank ABC", "ABC Bank"), 100);
    }

    #[test]
    fn subset_of_tokens_scores_100() {
        assert_eq!(token_set_ratio("ABC Bank", "ABC Bank N.A."), 100);
    }

    #[test]
    fn related_names_clear_the_engine_threshold() {
        assert!(token_set_ratio("ABC Bank", "ABC Bankcorp") >= 70);
    }

    #[test]
    fn unrelated_names_score_low() {
        assert!(token_set_ratio("ABC Bank", "Zenith Credit Union") < 50);
    }

    #[test]
    fn absent_values_score_zero() {
        assert_eq!(fuzzy_ratio(None, Some(&json!("ABC Bank"))), 0);
        assert_eq!(fuzzy_ratio(Some(&json!(null)), Some(&json!("ABC Bank"))), 0);
        assert_eq!(
            fuzzy_ratio(Some(&json!("ABC Bank")), Some(&json!("ABC BANK"))),
            100
        );
    }

    #[test]
    fn sequence_ratio_tracks_shared_characters() {
        assert_eq!(sequence_ratio("abc", "abc"), 100);
        assert_eq!(sequence_ratio("abc", "xyz"), 0);
        assert!(sequence_ratio("abc bank", "abc bankcorp") > 60);
    }
}
