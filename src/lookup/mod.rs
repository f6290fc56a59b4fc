// src/lookup/mod.rs
// =============================================================================
// This module contains the lookup logic itself.
//
// Submodules:
// - model: the view-models of one lookup (request, profile, repositories)
// - outcome: pure classification of API replies (no I/O, no display)
// - render: writes outcomes onto a display surface
// - controller: ties the two together around the network calls
// =============================================================================

mod controller;
mod error;
mod model;
mod outcome;
mod render;

pub use controller::{Clock, LookupController, SystemClock};
pub use error::RepositoryFetchError;
pub use model::{LookupRequest, Profile, ProfileResult, RateLimitInfo, RepositoryEntry, MAX_REPOSITORIES};
pub use outcome::{classify_profile, parse_repositories, ProfileOutcome};
pub use render::{render_error, render_outcome, render_profile, render_repositories};
