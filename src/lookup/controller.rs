// src/lookup/controller.rs
// =============================================================================
// LookupController: one submitted username in, one updated card out.
//
// What happens on submit:
// 1. Empty input -> nothing at all
// 2. GET /users/{username}, classified by `outcome::classify_profile`
// 3. Card updated by `render::render_outcome` (profile or error, rate limit,
//    reveal, clear input)
// 4. On success only: GET /users/{login}/repos, first five shown
//
// Overlapping submissions: every non-empty submission gets a generation
// number. A submission only writes to the card while it is still the latest
// one, so the last *submitted* username wins even if an older request
// answers later.
//
// Rust concepts:
// - Generics: the controller works with any GithubApi and DisplaySurface
// - Arc<Mutex<_>>: the card is shared with whoever prints it
// - AtomicU64: a counter that can be bumped through &self
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::model::{LookupRequest, ProfileResult};
use super::outcome::{classify_profile, parse_repositories};
use super::render::{render_outcome, render_repositories};
use crate::github::GithubApi;
use crate::surface::DisplaySurface;

/// Source of "now", in Unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

pub struct LookupController<A, S> {
    api: A,
    surface: Arc<Mutex<S>>,
    clock: Box<dyn Clock>,
    generation: AtomicU64,
}

impl<A, S> LookupController<A, S>
where
    A: GithubApi,
    S: DisplaySurface,
{
    pub fn new(api: A, surface: Arc<Mutex<S>>) -> Self {
        Self {
            api,
            surface,
            clock: Box::new(SystemClock),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn surface(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.surface)
    }

    // Handles one submission of the text input
    //
    // Returns the profile result this submission rendered, or None when it
    // rendered nothing (empty input, or overtaken by a newer submission).
    // Never fails: every error ends up on the card or in the logs.
    pub async fn handle_submit(&self, raw_input: &str) -> Option<ProfileResult> {
        let Some(request) = LookupRequest::parse(raw_input) else {
            debug!("ignoring empty submission");
            return None;
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let username = request.username();
        debug!(username, generation, "looking up profile");

        let reply = self.api.fetch_profile(username).await;
        if let Err(error) = &reply {
            warn!(username, %error, "profile request failed");
        }
        let outcome = classify_profile(reply, self.clock.now_millis());

        {
            let mut surface = self.surface.lock().await;
            if !self.is_current(generation) {
                debug!(username, generation, "discarding stale profile response");
                return None;
            }
            render_outcome(&mut *surface, &outcome);
        }

        info!(username, result = outcome_kind(&outcome.result), "lookup finished");

        if let ProfileResult::Found(profile) = &outcome.result {
            self.fetch_repositories_for(&profile.login, generation).await;
        }

        Some(outcome.result)
    }

    /// Loads the repository list for `handle` on behalf of the latest submission.
    ///
    /// Failures are logged and leave the list as it was.
    pub async fn load_repositories(&self, handle: &str) {
        let generation = self.generation.load(Ordering::SeqCst);
        self.fetch_repositories_for(handle, generation).await;
    }

    async fn fetch_repositories_for(&self, handle: &str, generation: u64) {
        let reply = self.api.fetch_repositories(handle).await;

        match parse_repositories(reply) {
            Ok(repositories) => {
                let mut surface = self.surface.lock().await;
                if !self.is_current(generation) {
                    debug!(handle, generation, "discarding stale repository list");
                    return;
                }
                render_repositories(&mut *surface, &repositories);
                debug!(handle, count = repositories.len(), "repositories rendered");
            }
            Err(error) => {
                warn!(handle, %error, "error fetching repositories");
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

fn outcome_kind(result: &ProfileResult) -> &'static str {
    match result {
        ProfileResult::Found(_) => "found",
        ProfileResult::NotFound => "not_found",
        ProfileResult::RateLimited { .. } => "rate_limited",
        ProfileResult::NetworkError => "network_error",
    }
}
