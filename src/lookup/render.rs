// src/lookup/render.rs
// =============================================================================
// The display half of a lookup: view-models in, surface writes out.
//
// These functions decide WHAT each slot shows; the `DisplaySurface`
// implementation decides how it looks.
// =============================================================================

use super::model::{Profile, ProfileResult, RateLimitInfo, RepositoryEntry};
use super::outcome::{error_message, remaining_text, reset_text, ProfileOutcome};
use crate::surface::{DisplaySurface, ProfileView};

pub const NO_BIO: &str = "No bio available";

pub fn profile_view(profile: &Profile) -> ProfileView {
    let bio = match profile.bio.as_deref() {
        Some(bio) if !bio.is_empty() => bio.to_string(),
        _ => NO_BIO.to_string(),
    };

    ProfileView {
        name: profile.display_name.clone().unwrap_or_default(),
        bio,
        followers: profile.follower_count.to_string(),
        following: profile.following_count.to_string(),
        public_repos: profile.public_repo_count.to_string(),
    }
}

pub fn render_profile<S: DisplaySurface + ?Sized>(surface: &mut S, profile: &Profile) {
    surface.show_profile(profile_view(profile));
    surface.set_avatar(&profile.avatar_url);
}

// Replaces the profile info with "Error: {message}" and blanks both
// rate-limit slots. The repository list and avatar are left alone.
pub fn render_error<S: DisplaySurface + ?Sized>(surface: &mut S, message: &str) {
    surface.show_error(format!("Error: {message}"));
    surface.set_rate_remaining(String::new());
    surface.set_rate_reset(String::new());
}

pub fn render_rate_limit<S: DisplaySurface + ?Sized>(surface: &mut S, rate_limit: &RateLimitInfo) {
    surface.set_rate_remaining(remaining_text(rate_limit));
    surface.set_rate_reset(reset_text(rate_limit));
}

// Applies a whole profile outcome: the branch itself, then the rate-limit
// slots, then reveal the card and clear the input.
//
// Rate-limited and not-found replies still carry meaningful headers, so the
// slots are refilled after `render_error` blanked them. A network error has
// no headers to show and leaves them blank.
pub fn render_outcome<S: DisplaySurface + ?Sized>(surface: &mut S, outcome: &ProfileOutcome) {
    match &outcome.result {
        ProfileResult::Found(profile) => render_profile(surface, profile),
        other => {
            if let Some(message) = error_message(other) {
                render_error(surface, &message);
            }
        }
    }

    if outcome.result != ProfileResult::NetworkError {
        render_rate_limit(surface, &outcome.rate_limit);
    }

    surface.reveal();
    surface.clear_input();
}

pub fn render_repositories<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    repositories: &[RepositoryEntry],
) {
    surface.clear_repositories();
    for repository in repositories {
        surface.append_repository(repository.clone());
    }
}
