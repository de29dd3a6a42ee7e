//! dog.ceo breed directory adapter.
//!
//! Implements the fetcher port against `https://dog.ceo/api`, translating
//! every failure mode (unknown breed, transport error, malformed payload)
//! uniformly into the not-found error kind.

pub mod client;
pub mod models;

pub use client::DogApiFetcher;
