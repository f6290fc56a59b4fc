// src/github/fetch.rs
// =============================================================================
// This module fetches user data from the GitHub REST API.
//
// Strategy:
// - Build URLs from a configurable base (https://api.github.com by default)
// - Send plain unauthenticated GET requests
// - Hand back the raw status, rate-limit headers and body, WITHOUT judging them
//
// Deciding what a 404 or a zero rate limit *means* is the job of
// `lookup::outcome`, which is pure and needs no network to test.
//
// Rust concepts:
// - Traits: `GithubApi` is the seam between the controller and the network
// - async-trait: lets trait methods be async
// - thiserror: derives Display/Error for our error enum
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::RateLimitInfo;
use crate::config::Config;

/// A raw provider response: status, rate-limit headers and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub rate_limit: RateLimitInfo,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: u16, rate_limit: RateLimitInfo, body: impl Into<String>) -> Self {
        Self {
            status,
            rate_limit,
            body: body.into(),
        }
    }
}

/// Failures that happen before a usable response exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The configured base URL cannot take path segments (e.g. `mailto:`).
    #[error("invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("could not build HTTP client: {0}")]
    Client(String),

    /// DNS failure, refused connection, broken body stream, ...
    #[error("network error: {0}")]
    Transport(String),
}

// The two GitHub calls the lookup needs
//
// #[cfg_attr(test, mockall::automock)] generates `MockGithubApi` in test
// builds only. It must come before #[async_trait].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// GET /users/{username}
    async fn fetch_profile(&self, username: &str) -> Result<ApiReply, FetchError>;

    /// GET /users/{username}/repos
    async fn fetch_repositories(&self, username: &str) -> Result<ApiReply, FetchError>;
}

/// `GithubApi` backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpGithubApi {
    client: Client,
    base_url: Url,
}

impl HttpGithubApi {
    // Creates the client once; reqwest pools connections across requests
    //
    // GitHub rejects requests without a User-Agent, so that is the one
    // header we set. No timeout: a request completes, fails or hangs
    // as the transport decides.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    // Builds {base}/users/{username}[/{tail}]
    //
    // The username is pushed as a single path segment, so characters like
    // ' ', '/' or '?' are percent-encoded instead of changing the route.
    fn user_url(&self, username: &str, tail: Option<&str>) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("users").push(username);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<ApiReply, FetchError> {
        debug!(%url, "sending GitHub API request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let rate_limit = RateLimitInfo::from_headers(response.headers());
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!(status, ?rate_limit, "GitHub API responded");
        Ok(ApiReply::new(status, rate_limit, body))
    }
}

#[async_trait]
impl GithubApi for HttpGithubApi {
    async fn fetch_profile(&self, username: &str) -> Result<ApiReply, FetchError> {
        let url = self.user_url(username, None)?;
        self.get(url).await
    }

    async fn fetch_repositories(&self, username: &str) -> Result<ApiReply, FetchError> {
        let url = self.user_url(username, Some("repos"))?;
        self.get(url).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return the raw status instead of an error for 404?
//    - For this app a 404 is an expected answer ("User Not Found"), not a
//      failure of the request itself
//    - Only problems where no response exists at all become FetchError
//
// 2. Why async-trait?
//    - The controller is generic over GithubApi and needs Send futures
//    - #[async_trait] rewrites async methods to return boxed Send futures,
//      which is also what mockall expects
//
// 3. Why push path segments instead of format!("{}/users/{}", ...)?
//    - A username typed with a space or a slash would otherwise change
//      the URL's meaning
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpGithubApi {
        let config = Config {
            api_url: Url::parse(base).unwrap(),
            user_agent: "github-lookup-tests".to_string(),
        };
        HttpGithubApi::new(&config).unwrap()
    }

    #[test]
    fn test_profile_url() {
        let url = api("https://api.github.com").user_url("octocat", None).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn test_repositories_url() {
        let url = api("https://api.github.com/")
            .user_url("octocat", Some("repos"))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/repos");
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        // GitHub Enterprise serves the API under /api/v3
        let url = api("https://ghe.example.com/api/v3")
            .user_url("mona", None)
            .unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users/mona");
    }

    #[test]
    fn test_username_is_one_encoded_segment() {
        let url = api("https://api.github.com")
            .user_url(" a/b", Some("repos"))
            .unwrap();
        assert_eq!(url.path(), "/users/%20a%2Fb/repos");
    }
}
