// src/config.rs
// =============================================================================
// Runtime configuration, resolved once from the command line.
//
// The CLI layer (src/cli.rs) parses and validates the raw arguments; this
// struct is what the rest of the application receives.
// =============================================================================

use url::Url;

use crate::cli::Cli;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the GitHub REST API.
    pub api_url: Url,
    /// Sent with every request; GitHub refuses requests without one.
    pub user_agent: String,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            user_agent: cli
                .user_agent
                .clone()
                .unwrap_or_else(default_user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_from_cli() {
        let cli = Cli::parse_from(["github-lookup", "user", "octocat"]);
        let config = Config::from(&cli);
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert!(config.user_agent.starts_with("github-lookup/"));
    }

    #[test]
    fn test_overrides_from_cli() {
        let cli = Cli::parse_from([
            "github-lookup",
            "--api-url",
            "https://ghe.example.com/api/v3",
            "--user-agent",
            "my-agent",
            "interactive",
        ]);
        let config = Config::from(&cli);
        assert_eq!(config.api_url.as_str(), "https://ghe.example.com/api/v3");
        assert_eq!(config.user_agent, "my-agent");
    }
}
