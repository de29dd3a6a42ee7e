//! In-memory memoization layer for breed lookups.
//!
//! Wraps the fetcher port as a decorator. The map is unbounded and entries
//! never expire; only successful lookups are stored.

pub mod caching_breed_fetcher;

pub use caching_breed_fetcher::CachingBreedFetcher;
