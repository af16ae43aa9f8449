//! Auric CLI - browse the catalog from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List rings under 50000 INR, sorted by price
//! auric browse --category rings --max-price 50000 --sort price_asc
//!
//! # Search across the catalog in USD
//! auric browse --search solitaire --currency USD
//!
//! # Product detail with a variant applied
//! auric show orn_123 --metal rose-gold --currency GBP
//! ```
//!
//! # Commands
//!
//! - `browse` - Fetch one listing page through the retrieval pipeline
//! - `show` - Fetch a single product and render its detail view

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "auric")]
#[command(author, version, about = "Auric catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print one page of the catalog
    Browse(commands::browse::BrowseArgs),
    /// Show a single product's detail view
    Show(commands::show::ShowArgs),
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Browse(args) => commands::browse::run(args).await?,
        Commands::Show(args) => commands::show::run(args).await?,
    }
    Ok(())
}
