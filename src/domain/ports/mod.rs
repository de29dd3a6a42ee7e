//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interface that adapters must
//! implement:
//! - BreedFetcher: sub-breed lookup against a breed directory
//!
//! The trait defines the contract that allows the domain to be independent
//! of specific infrastructure implementations.

pub mod breed_fetcher;

pub use breed_fetcher::BreedFetcher;
