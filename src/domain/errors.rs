//! Domain errors for breed lookups.

use thiserror::Error;

/// The single failure kind for breed lookups.
///
/// Invalid input, breeds unknown to the directory, and any failure inside a
/// fetcher implementation (transport, malformed payload) all collapse into
/// `NotFound`, so callers cannot distinguish "unknown breed" from
/// "infrastructure failure". The payload is the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreedError {
    #[error("{0}")]
    NotFound(String),
}

impl BreedError {
    /// The name was empty (or whitespace-only) after trimming.
    pub fn invalid_name() -> Self {
        Self::NotFound("breed name is invalid".to_string())
    }

    /// The directory answered but does not know this breed.
    pub fn unknown_breed(name: &str) -> Self {
        Self::NotFound(format!("breed not found: {name}"))
    }

    /// The lookup itself failed (transport, decoding, ...).
    pub fn fetch_failed(reason: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("error while fetching: {reason}"))
    }
}

/// Result alias for breed lookup operations.
pub type BreedResult<T> = Result<T, BreedError>;
