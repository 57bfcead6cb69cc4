//! CLI administration tool for compliance-portal.
//!
//! Provides commands for issuing and verifying signed session tokens without
//! requiring HTTP access.
//!
//! # Usage
//!
//! ```bash
//! # Issue a session token
//! cargo run --bin admin -- session issue --user user-42
//!
//! # Verify a token
//! cargo run --bin admin -- session verify "<token>"
//! ```
//!
//! # Environment Variables
//!
//! - `SESSION_SIGNING_SECRET` (required): HMAC key; must match the server's
//!
//! # Features
//!
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use compliance_portal::domain::ports::SessionProvider;
use compliance_portal::infrastructure::session::SignedSessionProvider;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing compliance-portal.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage session tokens
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

/// Session token subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Issue a new session token
    Issue {
        /// Identity the token resolves to (e.g. "user-42")
        #[arg(short, long)]
        user: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Verify an existing token
    Verify {
        /// Token value to check
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let secret = std::env::var("SESSION_SIGNING_SECRET")
        .context("SESSION_SIGNING_SECRET must be set")?;
    let provider = SignedSessionProvider::new(secret);

    match cli.command {
        Commands::Session { action } => match action {
            SessionAction::Issue { user, yes } => issue_session(&provider, user, yes)?,
            SessionAction::Verify { token } => verify_session(&provider, &token).await?,
        },
    }

    Ok(())
}

/// Issues a session token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the identity (or use provided)
/// 2. Generate a random nonce so reissued tokens differ
/// 3. Confirm issuance (unless `--yes` flag)
/// 4. Sign and display the token with usage instructions
///
/// # Security
///
/// Tokens are self-contained; issuing one leaves no server-side record.
/// Rotating `SESSION_SIGNING_SECRET` invalidates every outstanding token.
fn issue_session(
    provider: &SignedSessionProvider,
    user: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Issue Session Token".bright_blue().bold());
    println!();

    let identity = match user {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Identity")
            .with_initial_text("user-42")
            .interact_text()?,
    };

    println!();
    println!("  Identity: {}", identity.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue a token for this identity?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let nonce = generate_nonce();
    let token = provider.issue(&identity, &nonce);

    println!();
    println!("{}", "✅ Token issued!".green().bold());
    println!();
    println!("  Token: {}", token.bright_yellow().bold());
    println!();
    println!("{}", "Add this to your browser requests:".bright_white());
    println!(
        "  {}: session_token={}",
        "Cookie".bright_cyan(),
        token.bright_yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Cookie: session_token={}\" http://localhost:3000/dashboard",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Verifies a token and prints the identity it resolves to.
async fn verify_session(provider: &SignedSessionProvider, token: &str) -> Result<()> {
    println!("{}", "🔍 Verify Session Token".bright_blue().bold());
    println!();

    match provider.resolve(token).await {
        Ok(Some(identity)) => {
            println!("{}", "✅ Token is valid".green().bold());
            println!("  Identity: {}", identity.as_str().cyan());
        }
        Ok(None) => {
            println!("{}", "❌ Token is invalid".red().bold());
        }
        Err(e) => {
            println!("{} {}", "⚠️  Verification failed:".yellow(), e.to_error_info().message);
        }
    }

    println!();

    Ok(())
}

/// Generates a random token nonce.
///
/// # Format
///
/// - Length: 16 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_nonce() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const NONCE_LEN: usize = 16;

    let mut rng = rand::rng();

    (0..NONCE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
