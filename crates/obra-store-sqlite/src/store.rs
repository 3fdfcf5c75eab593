//! [`SqliteStore`]: the SQLite implementation of [`StorageBackend`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use tracing::debug;

use obra_core::store::StorageBackend;

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Obra collections backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  /// Missing parent directories are created.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    debug!(path = %path.display(), "opened sqlite store");
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Every stored key, sorted.
  pub async fn keys(&self) -> Result<Vec<String>> {
    let keys = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT key FROM entries ORDER BY key")?;
        let keys = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
      })
      .await?;
    Ok(keys)
  }
}

// ─── StorageBackend impl ─────────────────────────────────────────────────────

impl StorageBackend for SqliteStore {
  type Error = Error;

  async fn read(&self, key: &str) -> Result<Option<String>> {
    let key = key.to_owned();
    let value = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM entries WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(value)
  }

  async fn write(&self, key: &str, value: String) -> Result<()> {
    let key = key.to_owned();
    let at = Utc::now().to_rfc3339();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO entries (key, value, updated_at) VALUES (?1, ?2, ?3)
           ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
          rusqlite::params![key, value, at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
