//! dog.ceo breed directory client.
//!
//! Fetches the sub-breed list for a breed from the dog.ceo API. All
//! failures get reported as the single not-found error kind to align with
//! the fetcher contract: callers cannot tell an unknown breed from a
//! transport or decoding problem.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::errors::{BreedError, BreedResult};
use crate::domain::models::{normalize_breed_name, DogApiConfig};
use crate::domain::ports::BreedFetcher;

use super::models::BreedListResponse;

/// BreedFetcher implementation that relies on the dog.ceo API.
#[derive(Debug, Clone)]
pub struct DogApiFetcher {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL of the breed directory.
    base_url: String,
}

impl DogApiFetcher {
    /// Create a client against the public dog.ceo API with default settings.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(&DogApiConfig::default())
    }

    /// Create a client from configuration.
    ///
    /// The configurable `base_url` exists for tests and proxies.
    pub fn with_config(config: &DogApiConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl BreedFetcher for DogApiFetcher {
    /// Fetch the list of sub-breeds for the given breed from the directory.
    ///
    /// The name is validated and normalized here as well, so the adapter is
    /// safe to use standalone, without the caching decorator in front.
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        let Some(name) = normalize_breed_name(breed) else {
            return Err(BreedError::invalid_name());
        };

        let url = format!("{}/breed/{}/list", self.base_url, name);
        debug!(breed = %name, %url, "fetching sub-breeds");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(BreedError::fetch_failed)?;

        // The envelope, not the HTTP status code, decides the outcome.
        let envelope: BreedListResponse =
            response.json().await.map_err(BreedError::fetch_failed)?;

        if !envelope.is_success() {
            debug!(breed = %name, upstream = ?envelope.error_text(), "directory reported failure");
            return Err(BreedError::unknown_breed(&name));
        }

        Ok(envelope.into_sub_breeds())
    }
}
