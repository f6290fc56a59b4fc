// src/surface/terminal.rs
// =============================================================================
// Prints a `Card` to the terminal, either as a human-readable card or as JSON.
//
// A hidden card (nothing submitted yet) prints nothing at all.
// =============================================================================

use anyhow::Result;

use super::{Card, ProfileRegion};

// Prints the card either as text or JSON
pub fn print_card(card: &Card, json: bool) -> Result<()> {
    if !card.visible {
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(card)?);
    } else {
        print!("{}", format_card(card));
    }
    Ok(())
}

// Renders the card as lines of text
//
// Layout:
//   👤 name / bio / stats     (or the error heading)
//   🖼  avatar URL
//   📦 up to five repositories
//   📊 rate limit slots
pub fn format_card(card: &Card) -> String {
    let mut out = String::new();

    match &card.profile {
        ProfileRegion::Empty => {}
        ProfileRegion::Profile(view) => {
            out.push_str(&format!("👤 {}\n", view.name));
            out.push_str(&format!("   {}\n", view.bio));
            out.push_str(&format!(
                "   Followers: {}   Following: {}   Repos: {}\n",
                view.followers, view.following, view.public_repos
            ));
        }
        ProfileRegion::Error { heading } => {
            out.push_str(&format!("❌ {}\n", heading));
        }
    }

    if let Some(avatar) = &card.avatar_url {
        out.push_str(&format!("🖼  {}\n", avatar));
    }

    if !card.repositories.is_empty() {
        out.push_str("📦 Repositories:\n");
        for repo in &card.repositories {
            out.push_str(&format!("   {:<30} {}\n", repo.name, repo.url));
        }
    }

    out.push_str(&format!(
        "📊 Requests remaining: {}   Resets at: {}\n",
        card.rate_limit_remaining, card.rate_limit_reset
    ));
    out
}
