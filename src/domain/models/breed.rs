//! Breed name normalization.
//!
//! Lookups are case- and whitespace-insensitive: `"Husky"`, `" husky "` and
//! `"HUSKY"` all resolve to the same directory entry and the same cache key.

/// Normalize a raw breed name into its canonical lookup form.
///
/// Trims surrounding whitespace and lowercases with Unicode default casing
/// (locale-independent). Returns `None` when nothing remains after trimming;
/// callers map that to [`BreedError::invalid_name`](crate::domain::errors::BreedError::invalid_name).
pub fn normalize_breed_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize_breed_name("  Husky "), Some("husky".to_string()));
        assert_eq!(normalize_breed_name("HUSKY"), Some("husky".to_string()));
        assert_eq!(normalize_breed_name("husky"), Some("husky".to_string()));
    }

    #[test]
    fn test_interior_whitespace_is_preserved() {
        // Multi-word breeds keep their internal spacing.
        assert_eq!(
            normalize_breed_name(" German Shepherd "),
            Some("german shepherd".to_string())
        );
    }

    #[test]
    fn test_empty_and_whitespace_only_are_rejected() {
        assert_eq!(normalize_breed_name(""), None);
        assert_eq!(normalize_breed_name("   "), None);
        assert_eq!(normalize_breed_name("\t\n"), None);
    }

    #[test]
    fn test_non_ascii_lowercasing() {
        // Unicode default casing, not ASCII-only.
        assert_eq!(normalize_breed_name("ÖVCHARKA"), Some("övcharka".to_string()));
    }
}
