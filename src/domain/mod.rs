//! Domain layer for the Dogdex breed directory client
//!
//! This module contains the lookup contract, breed name normalization,
//! configuration models, and the domain error type.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{BreedError, BreedResult};
