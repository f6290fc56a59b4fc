// src/github/rate_limit.rs
// =============================================================================
// Rate limit metadata from GitHub response headers.
//
// GitHub sends these headers on every response, including errors:
// - X-RateLimit-Remaining: requests left in the current window ("59")
// - X-RateLimit-Reset: Unix epoch seconds when the window resets ("1700000000")
//
// Either header can be missing (e.g. behind some proxies), so both values
// are Options: None means "unknown".
// =============================================================================

use reqwest::header::HeaderMap;
use serde::Serialize;

pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit state reported by a single response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: Option<u64>,
    /// Unix timestamp (seconds) when the window resets.
    pub reset_at_epoch_seconds: Option<i64>,
}

impl RateLimitInfo {
    // Extracts rate limit info from response headers
    //
    // Header lookup in HeaderMap is case-insensitive, so "X-RateLimit-Reset"
    // and "x-ratelimit-reset" both match.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            remaining: header_value(headers, REMAINING_HEADER),
            reset_at_epoch_seconds: header_value(headers, RESET_HEADER),
        }
    }

    /// True when the provider reports zero requests left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

// Parses a header as a number, treating absent or garbled values as unknown
fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_reads_both_headers() {
        let info = RateLimitInfo::from_headers(&headers(&[
            ("x-ratelimit-remaining", "59"),
            ("x-ratelimit-reset", "1700000000"),
        ]));
        assert_eq!(info.remaining, Some(59));
        assert_eq!(info.reset_at_epoch_seconds, Some(1_700_000_000));
        assert!(!info.is_exhausted());
    }

    #[test]
    fn test_zero_remaining_is_exhausted() {
        let info = RateLimitInfo::from_headers(&headers(&[("x-ratelimit-remaining", "0")]));
        assert!(info.is_exhausted());
        assert_eq!(info.reset_at_epoch_seconds, None);
    }

    #[test]
    fn test_missing_or_invalid_headers_are_unknown() {
        let info = RateLimitInfo::from_headers(&headers(&[("x-ratelimit-remaining", "lots")]));
        assert_eq!(info, RateLimitInfo::default());
        assert!(!info.is_exhausted());
    }
}
