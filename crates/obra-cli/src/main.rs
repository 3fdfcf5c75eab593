//! `obra`: command-line access to the Obra construction workspace.
//!
//! Reads `obra.toml` (or the path given with `--config`), layers `OBRA_*`
//! environment variables on top, and opens the SQLite store it names.
//!
//! # Usage
//!
//! ```text
//! obra seed
//! obra summary
//! obra list proyectos --all
//! obra adjust-stock 2 40
//! OBRA_STORE_PATH=/tmp/obra.db obra stock
//! ```

mod commands;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use obra_core::CollectionHub;
use obra_store_sqlite::SqliteStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Obra construction workspace")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "obra.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Write the sample records into every collection never stored before.
  Seed,
  /// Print the dashboard summary and alerts.
  Summary,
  /// Print the rows of one collection as JSON.
  List {
    collection: CollectionName,
    /// Include deactivated rows.
    #[arg(long)]
    all:        bool,
  },
  /// Print active inventory items with their stock status.
  Stock,
  /// Set the current stock of an inventory item.
  AdjustStock {
    id:       String,
    /// Whole units; a decimal is truncated.
    quantity: String,
  },
  /// Deactivate a row, or delete it for inspections.
  Remove {
    collection: CollectionName,
    id:         String,
  },
}

/// Collection keys as they appear in storage.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CollectionName {
  #[value(name = "empleados")]
  Employees,
  #[value(name = "proyectos")]
  Projects,
  #[value(name = "inventario")]
  Inventory,
  #[value(name = "clientes")]
  Clients,
  #[value(name = "proveedores")]
  Suppliers,
  #[value(name = "inspecciones")]
  Inspections,
}

// ─── Config file ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CliConfig {
  /// SQLite file holding every collection.
  #[serde(default = "default_store_path")]
  store_path:    PathBuf,
  /// Seed each collection with sample records the first time it is opened.
  #[serde(default)]
  seed_on_start: bool,
}

fn default_store_path() -> PathBuf { PathBuf::from("~/.local/share/obra/obra.db") }

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("OBRA"))
    .build()
    .context("failed to read config file")?;

  let cfg: CliConfig = settings
    .try_deserialize()
    .context("failed to deserialise CliConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&cfg.store_path);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::debug!(path = %store_path.display(), "store ready");

  let hub = Arc::new(CollectionHub::new(store).with_seeding(cfg.seed_on_start));

  let output = match cli.command {
    Command::Seed => commands::seed(&hub).await,
    Command::Summary => commands::summary(&hub).await?,
    Command::List { collection, all } => commands::list(&hub, collection, all).await?,
    Command::Stock => commands::stock(&hub).await,
    Command::AdjustStock { id, quantity } => {
      commands::adjust_stock(&hub, &id, &quantity).await?
    }
    Command::Remove { collection, id } => {
      commands::remove(&hub, collection, &id).await?
    }
  };

  println!("{output}");
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
