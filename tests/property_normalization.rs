//! Property-based tests for breed name normalization.

use dogdex::domain::models::normalize_breed_name;
use proptest::prelude::*;

proptest! {
    /// Property: normalization is idempotent
    ///
    /// Running an already-normalized name through normalization again must
    /// return it unchanged, otherwise cache keys would drift between the
    /// decorator and the adapter.
    #[test]
    fn prop_normalization_is_idempotent(raw in ".*") {
        if let Some(normalized) = normalize_breed_name(&raw) {
            prop_assert_eq!(normalize_breed_name(&normalized), Some(normalized.clone()));
        }
    }

    /// Property: case and surrounding whitespace never change the key
    #[test]
    fn prop_case_and_padding_variants_share_a_key(
        name in "[a-z]{1,16}( [a-z]{1,16})?",
        left_pad in "[ \t]{0,4}",
        right_pad in "[ \t\n]{0,4}",
    ) {
        let padded = format!("{left_pad}{name}{right_pad}");
        let shouted = padded.to_uppercase();

        let base = normalize_breed_name(&name);
        prop_assert!(base.is_some());
        prop_assert_eq!(normalize_breed_name(&padded), base.clone());
        prop_assert_eq!(normalize_breed_name(&shouted), base);
    }

    /// Property: whitespace-only input never produces a key
    #[test]
    fn prop_whitespace_only_is_rejected(blank in "[ \t\r\n]*") {
        prop_assert_eq!(normalize_breed_name(&blank), None);
    }

    /// Property: a produced key is never empty and carries no padding
    #[test]
    fn prop_keys_are_trimmed_and_nonempty(raw in ".*") {
        if let Some(key) = normalize_breed_name(&raw) {
            prop_assert!(!key.is_empty());
            prop_assert_eq!(key.trim(), key.as_str());
        }
    }
}
