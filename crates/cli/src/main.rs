//! LevelUp Market CLI - one-shot catalog and assistant queries.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally filtered
//! levelup-cli catalog list --filter budget
//!
//! # Same, as JSON
//! levelup-cli catalog list --filter premium --json
//!
//! # Show one listing
//! levelup-cli catalog show 2
//!
//! # Ask the support assistant
//! levelup-cli ask Как пополнить баланс?
//!
//! # Print the FAQ
//! levelup-cli faq
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};

use levelup_storefront::config::StorefrontConfig;
use levelup_storefront::content::ContentStore;

mod commands;

#[derive(Parser)]
#[command(name = "levelup-cli")]
#[command(author, version, about = "LevelUp Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the account catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Ask the support assistant a question
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the reply and matched topic as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the frequently asked questions
    Faq,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List catalog listings
    List {
        /// Filter tag (`all`, `featured`, `budget`, `premium`)
        #[arg(short, long)]
        filter: Option<String>,

        /// Print listings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single listing
    Show {
        /// Listing id
        id: String,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "levelup_cli=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let content = ContentStore::seeded(&config.support_email);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { filter, json } => {
                commands::catalog::list(&content, filter.as_deref(), json, &mut out)?;
            }
            CatalogAction::Show { id, json } => {
                commands::catalog::show(&content, &id, json, &mut out)?;
            }
        },
        Commands::Ask { text, json } => {
            commands::ask::ask(&text.join(" "), json, &mut out)?;
        }
        Commands::Faq => commands::faq::print(&content, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
