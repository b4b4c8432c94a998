//! chromactl - ChromaDB collection maintenance CLI
//!
//! This binary lists, inspects and bulk-deletes collections on an external
//! ChromaDB server.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use chromactl::{clear, docker, inspect};

use anyhow::{Context, Result};
use chromactl_core::config::Config;
use chromactl_store::IncludeField;
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "chromactl")]
#[command(about = "ChromaDB collection inspection and maintenance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all collections
    List,
    /// Inspect a collection: item count, sample item and full id listing
    Inspect {
        /// Collection name
        collection: String,
    },
    /// Fetch specific items by id
    Fetch {
        /// Collection name
        collection: String,
        /// Item ids, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
        /// Fields to fetch: documents, metadatas, embeddings
        #[arg(long, value_delimiter = ',', value_parser = parse_include)]
        include: Vec<IncludeField>,
    },
    /// Delete every collection and verify the store is empty
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show store reachability and container status
    Status,
}

fn parse_include(value: &str) -> chromactl_core::Result<IncludeField> {
    value.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::List => list_collections(cli.config.as_deref()).await,
        Commands::Inspect { collection } => {
            inspect_collection(cli.config.as_deref(), &collection).await
        }
        Commands::Fetch {
            collection,
            ids,
            include,
        } => fetch_items(cli.config.as_deref(), &collection, &ids, &include).await,
        Commands::Clear { yes } => clear_store(cli.config.as_deref(), yes).await,
        Commands::Status => show_status(cli.config.as_deref()).await,
    }
}

/// Initialize logging system
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "chromactl={level},chromactl_store={level},chromactl_core={level}"
        ))
        .init();

    Ok(())
}

/// Load and validate configuration
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load(config_path)?;
    config.validate()?;
    Ok(config)
}

/// List all collections in the store
async fn list_collections(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let store = chromactl::connect(&config)
        .await
        .context("Failed to connect to the store")?;

    let names = inspect::list_all(store.as_ref()).await?;

    println!("Found {} collection(s):", names.len());
    for name in &names {
        println!("- {name}");
    }

    Ok(())
}

/// Inspect one collection and print its summary.
///
/// A failed inspection is printed as a structured outcome rather than
/// crashing the run; only a connection failure exits non-zero.
async fn inspect_collection(config_path: Option<&Path>, collection: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let store = chromactl::connect(&config)
        .await
        .context("Failed to connect to the store")?;

    println!("Checking collection: {collection}");
    println!("{}", "-".repeat(50));

    match inspect::inspect(store.as_ref(), collection, config.inspect.page_limit).await {
        Ok(summary) => {
            print!("{}", summary.render(config.inspect.doc_preview_chars));
            Ok(())
        }
        Err(e) if e.is_connection() => Err(e.into()),
        Err(e) => {
            println!("Error checking collection: {e}");
            Ok(())
        }
    }
}

/// Fetch items by id and print them as JSON
async fn fetch_items(
    config_path: Option<&Path>,
    collection: &str,
    ids: &[String],
    include: &[IncludeField],
) -> Result<()> {
    let config = load_config(config_path)?;
    let store = chromactl::connect(&config)
        .await
        .context("Failed to connect to the store")?;

    let include = if include.is_empty() {
        IncludeField::DEFAULT
    } else {
        include
    };

    match inspect::fetch_by_id(store.as_ref(), collection, ids, include).await {
        Ok(items) if items.is_empty() => {
            println!("No matching items found.");
            Ok(())
        }
        Ok(items) => {
            for (id, record) in &items {
                println!("{id}: {}", serde_json::to_string_pretty(record)?);
            }
            Ok(())
        }
        Err(e) if e.is_connection() => Err(e.into()),
        Err(e) => {
            println!("Error fetching items: {e}");
            Ok(())
        }
    }
}

/// Confirm deletion with user
///
/// Returns true if user confirms, false if cancelled
fn confirm_clear(config: &Config) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "Delete ALL collections from {}?",
            config.store.base_url()
        ))
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {e}"))
}

/// Delete every collection and report the outcome.
///
/// Exit code stays zero even when some deletions failed; the report makes
/// the partial failure visible. Only a connection failure before the pass
/// starts exits non-zero.
async fn clear_store(config_path: Option<&Path>, yes: bool) -> Result<()> {
    let config = load_config(config_path)?;

    println!("Connecting to the store...");
    let store = chromactl::connect(&config)
        .await
        .context("Failed to connect to the store")?;

    if !yes && !confirm_clear(&config)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    info!("Starting clear pass");
    let report = clear::clear_all(store.as_ref()).await?;

    if report.total == 0 {
        println!("No collections found in the store.");
        return Ok(());
    }

    print!("{}", report.render());
    Ok(())
}

/// Print store and container status
async fn show_status(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let status = docker::get_store_status(&config.store).await?;
    print!("{status}");
    Ok(())
}
