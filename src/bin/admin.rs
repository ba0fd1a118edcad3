//! CLI administration tool for url-alias.
//!
//! Manages alias mappings directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a mapping with a generated alias
//! cargo run --bin admin -- create https://example.com/page
//!
//! # Create a mapping with a chosen alias
//! cargo run --bin admin -- create https://example.com/page --alias ex1
//!
//! # Show where an alias points
//! cargo run --bin admin -- resolve ex1
//!
//! # Delete a mapping
//! cargo run --bin admin -- delete ex1
//!
//! # List the newest mappings
//! cargo run --bin admin -- list --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or `STORAGE_PATH`, plus the alias settings.

use url_alias::application::services::UrlService;
use url_alias::config;
use url_alias::domain::UrlError;
use url_alias::infrastructure::persistence::SqliteUrlRepository;
use url_alias::server::open_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Store a URL under a chosen or generated alias
    Create {
        /// Target URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the URL an alias points to
    Resolve { alias: String },

    /// Delete a mapping
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List the most recent mappings
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let pool = open_store(&config).await?;

    let repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
    let service = UrlService::new(repository, config.alias_settings());

    match cli.command {
        Commands::Create { url, alias } => create(&service, &url, alias.as_deref()).await?,
        Commands::Resolve { alias } => resolve(&service, &alias).await?,
        Commands::Delete { alias, yes } => delete(&service, &alias, yes).await?,
        Commands::List { limit } => list(&service, limit).await?,
        Commands::Db {
            action: DbAction::Check,
        } => check_db(&pool).await?,
    }

    pool.close().await;
    Ok(())
}

async fn create(
    service: &UrlService<SqliteUrlRepository>,
    url: &str,
    alias: Option<&str>,
) -> Result<()> {
    match service.create_mapping(url, alias).await {
        Ok(allocation) => {
            println!("{}", "✓ Mapping created".green().bold());
            println!("  {} {}", "ID:".bold(), allocation.id);
            println!("  {} {}", "Alias:".bold(), allocation.alias.cyan());
            println!("  {} {}", "URL:".bold(), url);
            Ok(())
        }
        Err(UrlError::AliasConflict(alias)) => {
            println!("{} '{}' is already in use", "✗ Alias".red().bold(), alias);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn resolve(service: &UrlService<SqliteUrlRepository>, alias: &str) -> Result<()> {
    match service.resolve_alias(alias).await {
        Ok(url) => {
            println!("{} → {}", alias.cyan(), url);
            Ok(())
        }
        Err(UrlError::NotFound(_)) => {
            println!("{} '{}' not found", "✗ Alias".red().bold(), alias);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes a mapping after showing where it points.
async fn delete(
    service: &UrlService<SqliteUrlRepository>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    let url = match service.resolve_alias(alias).await {
        Ok(url) => url,
        Err(UrlError::NotFound(_)) => {
            println!("{} '{}' not found", "✗ Alias".red().bold(), alias);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} {} → {}", "Delete".yellow().bold(), alias.cyan(), url);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    match service.remove_alias(alias).await {
        Ok(()) => println!("{}", "✓ Mapping deleted".green().bold()),
        // Someone else removed it between the lookup and the delete.
        Err(UrlError::NotFound(_)) => {
            println!("{} '{}' not found", "✗ Alias".red().bold(), alias)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

async fn list(service: &UrlService<SqliteUrlRepository>, limit: i64) -> Result<()> {
    let records = service.list_recent(limit).await?;

    if records.is_empty() {
        println!("{}", "No mappings found".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("{:<8} {:<20} {:<25} URL", "ID", "ALIAS", "CREATED").bold()
    );
    for record in records {
        println!(
            "{:<8} {:<20} {:<25} {}",
            record.id,
            record.alias.cyan(),
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            record.url
        );
    }

    Ok(())
}

async fn check_db(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await?;

    println!("{}", "✓ Database connection OK".green().bold());
    println!("  {} {}", "Mappings:".bold(), count);

    Ok(())
}
