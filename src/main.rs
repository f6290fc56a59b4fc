// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Build the GitHub client and the lookup controller around an empty card
// 4. Submit one username (`user`) or every line of stdin (`interactive`)
// 5. Exit with proper code (0 = shown, 1 = card shows an error, 2 = internal error)
// =============================================================================

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use github_lookup::cli::{Cli, Commands};
use github_lookup::config::Config;
use github_lookup::github::HttpGithubApi;
use github_lookup::logging::configure_logging;
use github_lookup::lookup::LookupController;
use github_lookup::surface::{print_card, Card};

type Controller = LookupController<HttpGithubApi, Card>;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    configure_logging()?;

    let config = Config::from(&cli);
    let api = HttpGithubApi::new(&config)?;
    let controller = LookupController::new(api, Arc::new(Mutex::new(Card::new())));

    match cli.command {
        Commands::User { username, json } => handle_user(&controller, &username, json).await,
        Commands::Interactive { json } => handle_interactive(&controller, json).await,
    }
}

// Handles the 'user' subcommand: a single submission
async fn handle_user(controller: &Controller, username: &str, json: bool) -> Result<i32> {
    controller.surface().lock().await.type_input(username);
    controller.handle_submit(username).await;

    let card = controller.surface().lock().await.clone();
    print_card(&card, json)?;

    if card.is_error() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'interactive' subcommand: every stdin line is a submission
//
// Submissions run one after another here, so the card printed after each
// line always belongs to that line.
async fn handle_interactive(controller: &Controller, json: bool) -> Result<i32> {
    let show_prompt = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if show_prompt {
            print!("username> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        controller.surface().lock().await.type_input(&line);
        if controller.handle_submit(&line).await.is_none() {
            continue;
        }

        let card = controller.surface().lock().await.clone();
        print_card(&card, json)?;
    }

    Ok(0)
}
