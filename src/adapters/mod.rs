//! Adapters implementing the fetcher port.

pub mod cache;
pub mod dog_api;
pub mod mock;
