//! Tribal Art Hub CLI - offline inspection of the demo catalog and
//! translation table.
//!
//! # Usage
//!
//! ```bash
//! # Print the seed catalog
//! hub-cli catalog list
//!
//! # Print one category as JSON
//! hub-cli catalog list --category statues --json
//!
//! # Print the seed artisans
//! hub-cli catalog artisans
//!
//! # Keys without a Hindi translation
//! hub-cli i18n missing --lang hi
//!
//! # A key in every language
//! hub-cli i18n lookup addToCart
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Seed listings, filterable by category
//! - `catalog artisans` - Seed artisan directory
//! - `i18n missing` - Untranslated keys per language
//! - `i18n lookup` - One key in every language

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hub-cli")]
#[command(author, version, about = "Tribal Art Hub CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the demo catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect the translation table
    I18n {
        #[command(subcommand)]
        action: I18nAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print every seed listing
    List {
        /// Only listings in this category (`paintings`, `statues`, ...)
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the seed artisans
    Artisans,
}

#[derive(Subcommand)]
enum I18nAction {
    /// List keys without a translation
    Missing {
        /// Language code (`en`, `hi`, `mr`); all languages when omitted
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Show a key in every language
    Lookup {
        /// Translation key, e.g. `heroTitle`
        key: String,
    },
}

fn main() {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category, json } => {
                commands::catalog::list(&mut out, category.as_deref(), json)?;
            }
            CatalogAction::Artisans => commands::catalog::artisans(&mut out)?,
        },
        Commands::I18n { action } => match action {
            I18nAction::Missing { lang } => commands::i18n::missing(&mut out, lang.as_deref())?,
            I18nAction::Lookup { key } => commands::i18n::lookup(&mut out, &key)?,
        },
    }
    Ok(())
}
