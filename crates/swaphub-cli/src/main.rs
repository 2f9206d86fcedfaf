//! SwapHub CLI - peer-to-peer item-swap marketplace client
//!
//! A command-line interface over the SwapHub REST backend: account
//! management, browsing listings, managing your own listings and swap
//! requests, dashboard stats, and admin moderation.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use swaphub_core::{ApiClient, ClientConfig, FileSessionStore};

#[derive(Parser)]
#[command(name = "swaphub")]
#[command(author, version, about = "SwapHub marketplace CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override the backend base URL (or set SWAPHUB_API_BASE_URL)
    #[arg(long, env = "SWAPHUB_API_BASE_URL", global = true)]
    api_base: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register, log in, log out, inspect the current session
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },

    /// Browse and search the marketplace
    Browse {
        #[command(subcommand)]
        action: commands::browse::BrowseAction,
    },

    /// Manage your own listings
    Listing {
        #[command(subcommand)]
        action: commands::listing::ListingAction,
    },

    /// Manage swap requests and redemptions
    Swap {
        #[command(subcommand)]
        action: commands::swap::SwapAction,
    },

    /// Dashboard statistics and activity
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },

    /// Moderation (admin accounts only)
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },

    /// Show client configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.api_base {
        Some(url) => ClientConfig::new(url.clone()),
        None => ClientConfig::from_env(),
    };
    let store = FileSessionStore::open_default()?;
    let client = ApiClient::new(config, std::sync::Arc::new(store))?;

    let ctx = commands::Context {
        client,
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Auth { action } => commands::auth::execute(&ctx, action).await,
        Commands::Browse { action } => commands::browse::execute(&ctx, action).await,
        Commands::Listing { action } => commands::listing::execute(&ctx, action).await,
        Commands::Swap { action } => commands::swap::execute(&ctx, action).await,
        Commands::Dashboard { action } => commands::dashboard::execute(&ctx, action).await,
        Commands::Admin { action } => commands::admin::execute(&ctx, action).await,
        Commands::Config { action } => commands::config::execute(&ctx, action).await,
    }
}
