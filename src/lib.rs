//! Dogdex - Dog Breed Directory Client
//!
//! Dogdex answers one question: what sub-breeds exist for a given dog breed
//! name? Lookups go through a memoizing cache stacked on a dog.ceo API
//! client, so repeated queries for the same breed (in any casing or
//! whitespace variation) hit the directory only once.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): the fetcher port, breed name
//!   normalization, configuration models, and the domain error
//! - **Adapters Layer** (`adapters`): port implementations - the dog.ceo
//!   HTTP client, the caching decorator, and a scripted mock for tests
//! - **Infrastructure Layer** (`infrastructure`): configuration loading
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use dogdex::adapters::cache::CachingBreedFetcher;
//! use dogdex::adapters::dog_api::DogApiFetcher;
//! use dogdex::domain::ports::BreedFetcher;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = CachingBreedFetcher::new(Arc::new(DogApiFetcher::new()?));
//!     let sub_breeds = fetcher.get_sub_breeds("Akita").await?;
//!     println!("{sub_breeds:?}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::CachingBreedFetcher;
pub use adapters::dog_api::DogApiFetcher;
pub use adapters::mock::{MockBreedFetcher, MockLookup};
pub use domain::errors::{BreedError, BreedResult};
pub use domain::models::{normalize_breed_name, Config, DogApiConfig, LoggingConfig};
pub use domain::ports::BreedFetcher;
pub use infrastructure::config::{ConfigError, ConfigLoader};
