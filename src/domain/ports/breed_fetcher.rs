//! Breed fetcher port.

use async_trait::async_trait;

use crate::domain::errors::BreedResult;

/// Lookup capability for dog breed sub-breeds.
///
/// This trait defines the single contract the rest of the crate depends on:
/// resolve a breed name to its list of sub-breed names, or fail with the one
/// not-found error kind. Implementations may perform I/O (the dog.ceo adapter
/// does), but that is invisible to callers beyond success or failure.
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Resolve `breed` to its sub-breed names.
    ///
    /// `breed` may be any string, including empty or whitespace-only; such
    /// names must fail with [`BreedError::invalid_name`]. An empty result
    /// list is a valid success (breed exists, no sub-breeds). Every failure
    /// cause — invalid name, unknown breed, transport or decoding problems —
    /// must surface as [`BreedError::NotFound`].
    ///
    /// [`BreedError::invalid_name`]: crate::domain::errors::BreedError::invalid_name
    /// [`BreedError::NotFound`]: crate::domain::errors::BreedError::NotFound
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>>;
}
