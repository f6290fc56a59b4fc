// src/surface/mod.rs
// =============================================================================
// The display surface: every user-visible output region the lookup writes to.
//
// The controller never prints anything itself. It writes to named slots on a
// `DisplaySurface`, which keeps it independent of where the output ends up:
// - `Card` keeps the slots in memory (used by the CLI and by tests)
// - `terminal` prints a `Card` as text or JSON
// =============================================================================

mod card;
mod terminal;

pub use card::{Card, ProfileRegion};
pub use terminal::print_card;

use serde::Serialize;

use crate::lookup::RepositoryEntry;

/// Profile fields, already formatted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub bio: String,
    pub followers: String,
    pub following: String,
    pub public_repos: String,
}

/// Named output slots of the lookup card.
pub trait DisplaySurface: Send {
    /// Fill the profile-info region with regular profile fields.
    fn show_profile(&mut self, view: ProfileView);

    fn set_avatar(&mut self, url: &str);

    /// Replace the profile-info region with a single error heading.
    fn show_error(&mut self, heading: String);

    fn set_rate_remaining(&mut self, text: String);

    fn set_rate_reset(&mut self, text: String);

    fn clear_repositories(&mut self);

    /// Add a link that opens `entry.url` in a new browsing context.
    fn append_repository(&mut self, entry: RepositoryEntry);

    /// Make the card visible. Idempotent.
    fn reveal(&mut self);

    fn clear_input(&mut self);
}
