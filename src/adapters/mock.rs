//! Mock breed fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::errors::{BreedError, BreedResult};
use crate::domain::models::normalize_breed_name;
use crate::domain::ports::BreedFetcher;

/// Scripted response configuration.
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    /// Sub-breeds returned on success
    pub sub_breeds: Vec<String>,
    /// Whether to simulate failure
    pub fail: bool,
    /// Error message if failing; defaults to the unknown-breed message
    pub error_message: Option<String>,
}

impl MockLookup {
    /// A successful lookup returning the given sub-breeds.
    pub fn success(sub_breeds: Vec<String>) -> Self {
        Self {
            sub_breeds,
            ..Default::default()
        }
    }

    /// A failing lookup with the given message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            fail: true,
            error_message: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Mock breed fetcher with per-breed scripted responses.
///
/// Honors the full port contract: names are validated and normalized the
/// same way real fetchers do, and every invocation that reaches the lookup
/// is recorded so tests can assert exactly what a decorator delegated.
/// Unscripted breeds resolve to the default response (success, no
/// sub-breeds, unless overridden).
pub struct MockBreedFetcher {
    responses: RwLock<HashMap<String, MockLookup>>,
    default_response: MockLookup,
    calls: RwLock<Vec<String>>,
}

impl MockBreedFetcher {
    /// Create a mock whose unscripted lookups succeed with no sub-breeds.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: MockLookup::default(),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Create a mock with a custom response for unscripted breeds.
    pub fn with_default_response(response: MockLookup) -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: response,
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Script the response for a specific breed.
    ///
    /// The key is normalized like a real lookup, so scripting `"Akita"`
    /// matches a request for `" akita "`.
    pub async fn set_response(&self, breed: &str, response: MockLookup) {
        let key = normalize_breed_name(breed).unwrap_or_default();
        let mut responses = self.responses.write().await;
        responses.insert(key, response);
    }

    /// Breed names received so far, in call order, exactly as passed in.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    /// Number of lookups that reached this fetcher.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    async fn response_for(&self, key: &str) -> MockLookup {
        let responses = self.responses.read().await;
        responses
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone())
    }
}

impl Default for MockBreedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedFetcher for MockBreedFetcher {
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        let Some(key) = normalize_breed_name(breed) else {
            return Err(BreedError::invalid_name());
        };

        self.calls.write().await.push(breed.to_string());

        let response = self.response_for(&key).await;
        if response.fail {
            Err(response
                .error_message
                .map_or_else(|| BreedError::unknown_breed(&key), BreedError::NotFound))
        } else {
            Ok(response.sub_breeds)
        }
    }
}
