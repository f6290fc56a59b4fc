// src/lib.rs
// =============================================================================
// github-lookup: look up a GitHub user, their first five repositories and the
// API rate limit, and show the result on a display surface.
//
// The binary in src/main.rs is a thin terminal front end over this library;
// the controller can be driven by any other `DisplaySurface` as well.
// =============================================================================

pub mod cli;
pub mod config;
pub mod github;
pub mod logging;
pub mod lookup;
pub mod surface;
