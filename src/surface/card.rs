// src/surface/card.rs
// In-memory display surface. Serializes to the JSON printed by `--json`.

use serde::Serialize;

use super::{DisplaySurface, ProfileView};
use crate::lookup::RepositoryEntry;

/// Shown in both rate-limit slots before the first lookup.
pub const UNKNOWN_SLOT: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileRegion {
    #[default]
    Empty,
    Profile(ProfileView),
    Error { heading: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub visible: bool,
    /// The text input. Not part of the card itself.
    #[serde(skip)]
    pub input: String,
    pub profile: ProfileRegion,
    pub avatar_url: Option<String>,
    pub repositories: Vec<RepositoryEntry>,
    pub rate_limit_remaining: String,
    pub rate_limit_reset: String,
}

impl Card {
    pub fn new() -> Self {
        Self {
            visible: false,
            input: String::new(),
            profile: ProfileRegion::Empty,
            avatar_url: None,
            repositories: Vec::new(),
            rate_limit_remaining: UNKNOWN_SLOT.to_string(),
            rate_limit_reset: UNKNOWN_SLOT.to_string(),
        }
    }

    pub fn type_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn is_error(&self) -> bool {
        matches!(self.profile, ProfileRegion::Error { .. })
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for Card {
    fn show_profile(&mut self, view: ProfileView) {
        self.profile = ProfileRegion::Profile(view);
    }

    fn set_avatar(&mut self, url: &str) {
        self.avatar_url = Some(url.to_string());
    }

    fn show_error(&mut self, heading: String) {
        self.profile = ProfileRegion::Error { heading };
    }

    fn set_rate_remaining(&mut self, text: String) {
        self.rate_limit_remaining = text;
    }

    fn set_rate_reset(&mut self, text: String) {
        self.rate_limit_reset = text;
    }

    fn clear_repositories(&mut self) {
        self.repositories.clear();
    }

    fn append_repository(&mut self, entry: RepositoryEntry) {
        self.repositories.push(entry);
    }

    fn reveal(&mut self) {
        self.visible = true;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}
