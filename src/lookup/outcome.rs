// src/lookup/outcome.rs
// =============================================================================
// The pure half of a lookup: raw replies in, view-models out.
//
// Nothing in this file touches the network or the display surface, and the
// current time is passed in, so every branch can be tested directly.
//
// Profile branches, first match wins:
//   1. X-RateLimit-Remaining == 0     -> RateLimited (whatever the status)
//   2. HTTP 200 with a valid payload  -> Found
//   3. HTTP 404                       -> NotFound
//   4. anything else                  -> NetworkError
// =============================================================================

use chrono::{Local, TimeZone};
use serde::de::DeserializeOwned;

use super::error::RepositoryFetchError;
use super::model::{Profile, ProfileResult, RateLimitInfo, RepositoryEntry, MAX_REPOSITORIES};
use crate::github::{ApiReply, FetchError};

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;

/// A classified profile reply plus the rate-limit headers it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOutcome {
    pub result: ProfileResult,
    pub rate_limit: RateLimitInfo,
}

pub fn classify_profile(reply: Result<ApiReply, FetchError>, now_millis: i64) -> ProfileOutcome {
    let reply = match reply {
        Ok(reply) => reply,
        Err(_) => {
            return ProfileOutcome {
                result: ProfileResult::NetworkError,
                rate_limit: RateLimitInfo::default(),
            }
        }
    };

    let result = if reply.rate_limit.is_exhausted() {
        ProfileResult::RateLimited {
            retry_after_seconds: retry_after_seconds(
                reply.rate_limit.reset_at_epoch_seconds,
                now_millis,
            ),
        }
    } else if reply.status == STATUS_OK {
        match decode::<Profile>(&reply.body) {
            Ok(profile) => ProfileResult::Found(profile),
            Err(_) => ProfileResult::NetworkError,
        }
    } else if reply.status == STATUS_NOT_FOUND {
        ProfileResult::NotFound
    } else {
        ProfileResult::NetworkError
    };

    ProfileOutcome {
        result,
        rate_limit: reply.rate_limit,
    }
}

// Whole seconds until the rate-limit window resets, rounded up
//
// Not clamped: a reset time in the past gives zero or a negative number.
// An unknown reset time counts as "now".
pub fn retry_after_seconds(reset_at_epoch_seconds: Option<i64>, now_millis: i64) -> i64 {
    let reset_millis = reset_at_epoch_seconds
        .map(|secs| secs.saturating_mul(1000))
        .unwrap_or(now_millis);
    let diff = reset_millis.saturating_sub(now_millis);

    diff.div_euclid(1000) + i64::from(diff.rem_euclid(1000) != 0)
}

/// The user-visible message for a profile failure, or `None` for `Found`.
pub fn error_message(result: &ProfileResult) -> Option<String> {
    match result {
        ProfileResult::Found(_) => None,
        ProfileResult::RateLimited {
            retry_after_seconds,
        } => Some(format!(
            "API rate limit exceeded. Please try again in {retry_after_seconds} seconds."
        )),
        ProfileResult::NotFound => Some("User Not Found".to_string()),
        ProfileResult::NetworkError => Some("An error occurred".to_string()),
    }
}

pub fn parse_repositories(
    reply: Result<ApiReply, FetchError>,
) -> Result<Vec<RepositoryEntry>, RepositoryFetchError> {
    let reply = reply?;

    if reply.status != STATUS_OK {
        return Err(RepositoryFetchError::UnexpectedStatus(reply.status));
    }

    let mut repositories: Vec<RepositoryEntry> =
        decode(&reply.body).map_err(|e| RepositoryFetchError::Decode(e.to_string()))?;
    repositories.truncate(MAX_REPOSITORIES);
    Ok(repositories)
}

/// Text for the "requests remaining" slot. Unknown renders as empty.
pub fn remaining_text(rate_limit: &RateLimitInfo) -> String {
    rate_limit
        .remaining
        .map(|n| n.to_string())
        .unwrap_or_default()
}

/// Text for the "resets at" slot: local wall-clock time, e.g. `1:13:20 PM`.
pub fn reset_text(rate_limit: &RateLimitInfo) -> String {
    rate_limit
        .reset_at_epoch_seconds
        .map(format_reset_time)
        .unwrap_or_default()
}

pub fn format_reset_time(epoch_seconds: i64) -> String {
    match Local.timestamp_opt(epoch_seconds, 0).single() {
        Some(time) => time.format("%-I:%M:%S %p").to_string(),
        None => String::new(),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOW_MILLIS: i64 = 1_700_000_000_000;

    const OCTOCAT: &str = r#"{
        "login": "octocat",
        "name": "The Octocat",
        "followers": 10,
        "following": 2,
        "public_repos": 8,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4"
    }"#;

    fn limits(remaining: u64, reset: i64) -> RateLimitInfo {
        RateLimitInfo {
            remaining: Some(remaining),
            reset_at_epoch_seconds: Some(reset),
        }
    }

    fn repos_json(count: usize) -> String {
        let items: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"name":"repo-{i}","html_url":"https://github.com/octocat/repo-{i}","stargazers_count":{i}}}"#
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn test_found_profile() {
        let outcome = classify_profile(
            Ok(ApiReply::new(200, limits(59, 1_700_000_000), OCTOCAT)),
            NOW_MILLIS,
        );

        match &outcome.result {
            ProfileResult::Found(profile) => {
                assert_eq!(profile.login, "octocat");
                assert_eq!(profile.bio, None);
            }
            other => panic!("expected Found, got {other:?}"),
        }
        assert_eq!(outcome.rate_limit, limits(59, 1_700_000_000));
    }

    #[test]
    fn test_rate_limit_wins_over_any_status() {
        for status in [200, 403, 404, 500] {
            let outcome = classify_profile(
                Ok(ApiReply::new(status, limits(0, 1_700_000_090), "{}")),
                NOW_MILLIS + 500,
            );
            assert_eq!(
                outcome.result,
                ProfileResult::RateLimited {
                    retry_after_seconds: 90
                },
                "status {status}"
            );
            assert_eq!(outcome.rate_limit, limits(0, 1_700_000_090));
        }
    }

    #[test]
    fn test_not_found() {
        let outcome = classify_profile(
            Ok(ApiReply::new(404, limits(58, 1_700_000_000), r#"{"message":"Not Found"}"#)),
            NOW_MILLIS,
        );
        assert_eq!(outcome.result, ProfileResult::NotFound);
        assert_eq!(outcome.rate_limit, limits(58, 1_700_000_000));
    }

    #[test]
    fn test_unexpected_status_and_bad_payload_are_network_errors() {
        let server_error = classify_profile(
            Ok(ApiReply::new(502, limits(57, 1_700_000_000), "Bad Gateway")),
            NOW_MILLIS,
        );
        assert_eq!(server_error.result, ProfileResult::NetworkError);

        let garbled = classify_profile(
            Ok(ApiReply::new(200, limits(57, 1_700_000_000), "<html>")),
            NOW_MILLIS,
        );
        assert_eq!(garbled.result, ProfileResult::NetworkError);
    }

    #[test]
    fn test_transport_error() {
        let outcome = classify_profile(
            Err(FetchError::Transport("dns error".to_string())),
            NOW_MILLIS,
        );
        assert_eq!(outcome.result, ProfileResult::NetworkError);
        assert_eq!(outcome.rate_limit, RateLimitInfo::default());
    }

    #[test]
    fn test_retry_after_rounds_up() {
        let reset = Some(1_700_000_010);
        assert_eq!(retry_after_seconds(reset, NOW_MILLIS), 10);
        assert_eq!(retry_after_seconds(reset, NOW_MILLIS + 1), 10);
        assert_eq!(retry_after_seconds(reset, NOW_MILLIS + 999), 10);
        assert_eq!(retry_after_seconds(reset, NOW_MILLIS + 1000), 9);
    }

    #[test]
    fn test_retry_after_is_not_clamped() {
        assert_eq!(retry_after_seconds(Some(1_699_999_998), NOW_MILLIS + 500), -2);
        assert_eq!(retry_after_seconds(None, NOW_MILLIS), 0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            error_message(&ProfileResult::RateLimited {
                retry_after_seconds: 42
            })
            .as_deref(),
            Some("API rate limit exceeded. Please try again in 42 seconds.")
        );
        assert_eq!(
            error_message(&ProfileResult::NotFound).as_deref(),
            Some("User Not Found")
        );
        assert_eq!(
            error_message(&ProfileResult::NetworkError).as_deref(),
            Some("An error occurred")
        );
    }

    #[test]
    fn test_repositories_truncated_in_order() {
        let repos = parse_repositories(Ok(ApiReply::new(
            200,
            RateLimitInfo::default(),
            repos_json(8),
        )))
        .unwrap();

        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["repo-0", "repo-1", "repo-2", "repo-3", "repo-4"]);
        assert_eq!(repos[3].url, "https://github.com/octocat/repo-3");
    }

    #[test]
    fn test_short_repository_list_is_kept_whole() {
        let repos = parse_repositories(Ok(ApiReply::new(
            200,
            RateLimitInfo::default(),
            repos_json(2),
        )))
        .unwrap();
        assert_eq!(repos.len(), 2);
    }

    #[test]
    fn test_repository_failures() {
        assert_eq!(
            parse_repositories(Ok(ApiReply::new(403, RateLimitInfo::default(), "{}"))),
            Err(RepositoryFetchError::UnexpectedStatus(403))
        );
        assert!(matches!(
            parse_repositories(Ok(ApiReply::new(200, RateLimitInfo::default(), "{}"))),
            Err(RepositoryFetchError::Decode(_))
        ));
        assert!(matches!(
            parse_repositories(Err(FetchError::Transport("reset".to_string()))),
            Err(RepositoryFetchError::Transport(_))
        ));
    }

    #[test]
    fn test_rate_limit_slot_texts() {
        let known = limits(59, 1_700_000_000);
        assert_eq!(remaining_text(&known), "59");
        assert_eq!(reset_text(&known), format_reset_time(1_700_000_000));
        assert!(!reset_text(&known).is_empty());

        let unknown = RateLimitInfo::default();
        assert_eq!(remaining_text(&unknown), "");
        assert_eq!(reset_text(&unknown), "");
    }
}
