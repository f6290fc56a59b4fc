// src/lookup/model.rs
// =============================================================================
// View-models for a single lookup cycle.
//
// Nothing here outlives one submission: each new lookup builds fresh values
// and overwrites whatever the display surface showed before.
// =============================================================================

use serde::{Deserialize, Serialize};

pub use crate::github::RateLimitInfo;

/// At most this many repositories are shown, in provider order.
pub const MAX_REPOSITORIES: usize = 5;

/// A username as typed. Only non-empty input becomes a request.
///
/// The text is deliberately not trimmed: `" octocat"` is looked up as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest(String);

impl LookupRequest {
    pub fn parse(raw_input: &str) -> Option<Self> {
        if raw_input.is_empty() {
            None
        } else {
            Some(Self(raw_input.to_string()))
        }
    }

    pub fn username(&self) -> &str {
        &self.0
    }
}

/// Public profile fields, as returned by GET /users/{username}.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(rename = "name")]
    pub display_name: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "followers")]
    pub follower_count: u64,
    #[serde(rename = "following")]
    pub following_count: u64,
    #[serde(rename = "public_repos")]
    pub public_repo_count: u64,
    pub avatar_url: String,
    pub login: String,
}

/// What a profile lookup produced. Exactly one per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileResult {
    Found(Profile),
    NotFound,
    /// Seconds until the window resets; may be negative if the reset
    /// time is already in the past.
    RateLimited { retry_after_seconds: i64 },
    /// Transport failure, undecodable payload, or any unexpected status.
    NetworkError,
}

/// One entry of GET /users/{username}/repos. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub name: String,
    #[serde(rename(deserialize = "html_url"))]
    pub url: String,
}
