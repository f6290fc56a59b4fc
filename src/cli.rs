// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways to submit a username:
// - `github-lookup user octocat`      one lookup, then exit
// - `github-lookup interactive`       a prompt; every line is a new lookup
//
// Rust concepts:
// - Derive macros: clap generates the parser from these types
// - value_parser: clap validates --api-url as a real URL for us
// =============================================================================

use clap::{Parser, Subcommand};
use url::Url;

use crate::config::DEFAULT_API_URL;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "github-lookup",
    version,
    about = "Look up a GitHub user's profile, repositories and API rate limit",
    long_about = "github-lookup queries the public GitHub REST API for a user's profile, \
                  shows their first five repositories and reports how many unauthenticated \
                  requests remain before the rate limit resets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the GitHub REST API
    ///
    /// Point this at a GitHub Enterprise instance (e.g. https://ghe.example.com/api/v3)
    #[arg(
        long,
        global = true,
        env = "GITHUB_LOOKUP_API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = Url::parse
    )]
    pub api_url: Url,

    /// User-Agent header sent with every request (default: github-lookup/<version>)
    #[arg(long, global = true)]
    pub user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a single user
    ///
    /// Example: github-lookup user octocat
    User {
        /// GitHub username, used exactly as typed
        username: String,

        /// Print the card as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read usernames from standard input, one lookup per line
    ///
    /// Empty lines are ignored. Exit with Ctrl-D.
    Interactive {
        /// Print each card as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
