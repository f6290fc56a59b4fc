// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Fetching a user's public profile (GET /users/{username})
// - Fetching a user's repository list (GET /users/{username}/repos)
// - Reading the X-RateLimit-* headers GitHub attaches to every response
//
// The rest of the app only sees the `GithubApi` trait, so the lookup logic
// can be tested against a mock without any network access.
// =============================================================================

mod fetch;
mod rate_limit;

// Re-export the public API of this module
pub use fetch::{ApiReply, FetchError, GithubApi, HttpGithubApi};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use fetch::MockGithubApi;
