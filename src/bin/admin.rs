//! CLI administration tool for linkcard.
//!
//! Creates and inspects short links directly against the database, without
//! going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Create a link (prompts for anything missing)
//! cargo run --bin admin -- link create --url https://example.org --title "Example"
//!
//! # Show a stored link
//! cargo run --bin admin -- link show a1B2c3
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `linkcard::config`). A database is required:
//! `DATABASE_URL` or the `DB_*` components.

use linkcard::application::services::{LinkService, LinkSubmission};
use linkcard::config::{Config, mask_connection_string};
use linkcard::error::AppError;
use linkcard::infrastructure::persistence::PgLinkRepository;
use linkcard::server::build_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkcard.
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
    /// Create and inspect short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new short link
    Create {
        /// Target URL (prompted for if omitted)
        #[arg(short, long)]
        url: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Preview image URL
        #[arg(short, long)]
        image: Option<String>,

        /// Quote shown on the preview page
        #[arg(short, long)]
        quote: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a link by code
    Show {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = build_service(config, repository)?;
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.listen_addr));

    match action {
        LinkAction::Create {
            url,
            title,
            description,
            image,
            quote,
            yes,
        } => {
            let submission = LinkSubmission {
                url: String::new(),
                title,
                description,
                image,
                quote,
            };
            create_link(&service, &base_url, url, submission, yes).await?;
        }
        LinkAction::Show { code } => {
            show_link(&service, &base_url, &code).await?;
        }
    }

    Ok(())
}

/// Creates a short link with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Display link details
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store through [`LinkService`], with the usual collision retries
async fn create_link(
    service: &LinkService,
    base_url: &str,
    url: Option<String>,
    mut submission: LinkSubmission,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create short link".bright_blue().bold());
    println!();

    submission.url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Target URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    println!();
    println!("{}", "Link details:".bright_white().bold());
    println!("  URL:         {}", submission.url.cyan());
    print_optional("Title", submission.title.as_deref());
    print_optional("Description", submission.description.as_deref());
    print_optional("Image", submission.image.as_deref());
    print_optional("Quote", submission.quote.as_deref());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let short_link = match service.create_short_link(submission, base_url).await {
        Ok(short_link) => short_link,
        Err(e @ AppError::Validation { .. }) => {
            println!("{} {}", "Invalid input:".red().bold(), e);
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to create link: {}", e)),
    };

    println!("{}", "Link created".green().bold());
    println!();
    println!("  Code:      {}", short_link.code().bright_yellow().bold());
    println!("  Short URL: {}", short_link.short_url.bright_cyan());
    println!();

    Ok(())
}

/// Prints a stored link.
async fn show_link(service: &LinkService, base_url: &str, code: &str) -> Result<()> {
    let short_link = match service.get_metadata(code, base_url).await {
        Ok(short_link) => short_link,
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "No link with code".yellow(), code.bright_white());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to load link: {}", e)),
    };
    let link = &short_link.link;

    println!("{}", "Short link".bright_blue().bold());
    println!();
    println!("  ID:          {}", link.id.to_string().bright_black());
    println!("  Code:        {}", link.code.bright_yellow().bold());
    println!("  Short URL:   {}", short_link.short_url.bright_cyan());
    println!("  URL:         {}", link.url.cyan());
    print_optional("Title", Some(link.title.as_str()));
    print_optional("Description", Some(link.description.as_str()));
    print_optional("Image", Some(link.image.as_str()));
    println!("  Quote:       {}", link.quote);
    println!(
        "  Created:     {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

fn print_optional(label: &str, value: Option<&str>) {
    let shown = match value {
        Some(v) if !v.trim().is_empty() => v.normal(),
        _ => "-".bright_black(),
    };
    println!("  {:<12} {}", format!("{}:", label), shown);
}

/// Displays link statistics.
///
/// Shows:
/// - Total number of links
/// - Links created in the last 24 hours
/// - Most recent creation time
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let recent_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM links WHERE created_at > now() - INTERVAL '24 hours'",
    )
    .fetch_one(pool)
    .await?;

    let last_created: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT MAX(created_at) FROM links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:          {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Last 24 hours:  {}",
        recent_count.to_string().bright_green().bold()
    );
    println!(
        "  Last created:   {}",
        last_created
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string())
            .bright_black()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let has_table: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'links')",
            )
            .fetch_one(pool)
            .await?;

            println!("{}", "Database connection OK".green().bold());
            if has_table {
                println!("{}", "Table 'links' present".green());
            } else {
                println!(
                    "{}",
                    "Table 'links' missing, start the server once to run migrations".yellow()
                );
            }
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
