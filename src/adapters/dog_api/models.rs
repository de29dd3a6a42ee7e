//! dog.ceo API response models.
//!
//! These structs map the JSON envelope every dog.ceo endpoint wraps its
//! payload in. They are used internally by the dog.ceo adapter and are not
//! part of the public domain model.

use serde::Deserialize;

/// Envelope returned by the sub-breed list endpoint.
///
/// On success `status` is `"success"` and `message` is an array of sub-breed
/// names. On failure `status` is `"error"` and `message` is a human-readable
/// string. The envelope is authoritative: dog.ceo pairs its error envelope
/// with a 404, but the HTTP status code is never consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedListResponse {
    /// `"success"` or `"error"`, compared case-insensitively.
    #[serde(default)]
    pub status: Option<String>,
    /// Sub-breed names on success, error text on failure.
    #[serde(default)]
    pub message: Option<BreedListMessage>,
}

/// The polymorphic `message` field of the envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BreedListMessage {
    /// Sub-breed names, in directory order.
    SubBreeds(Vec<String>),
    /// Error description.
    Text(String),
    /// Any other payload shape; treated as "no sub-breed list".
    Other(serde_json::Value),
}

impl BreedListResponse {
    /// Whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("success"))
    }

    /// The error text carried by a failure envelope, if any.
    pub fn error_text(&self) -> Option<&str> {
        match &self.message {
            Some(BreedListMessage::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The sub-breed list; missing or non-array payloads yield an empty
    /// list, matching the lenient read the directory contract requires.
    pub fn into_sub_breeds(self) -> Vec<String> {
        match self.message {
            Some(BreedListMessage::SubBreeds(sub_breeds)) => sub_breeds,
            _ => Vec::new(),
        }
    }
}
