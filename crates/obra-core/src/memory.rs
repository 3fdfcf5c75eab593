//! [`MemoryBackend`]: a process-local [`StorageBackend`].

use std::{
  collections::HashMap,
  sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
  },
};

use thiserror::Error;

use crate::store::StorageBackend;

#[derive(Debug, Error)]
pub enum MemoryError {
  /// Stand-in for a full or read-only medium.
  #[error("write rejected for key {0:?}")]
  WriteRejected(String),

  #[error("memory backend lock poisoned")]
  Poisoned,
}

/// A backend holding every entry in a mutex-guarded map.
///
/// Used by tests and by callers that want a throwaway workspace. Writes can
/// be switched off with [`MemoryBackend::fail_writes`] to exercise the
/// write-failure path.
#[derive(Debug, Default)]
pub struct MemoryBackend {
  entries:     Mutex<HashMap<String, String>>,
  fail_writes: AtomicBool,
}

impl MemoryBackend {
  pub fn new() -> Self { Self::default() }

  /// Make every subsequent write fail (or succeed again).
  pub fn fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  /// Store `value` verbatim, bypassing serialization. Lets tests plant
  /// corrupt entries.
  pub fn insert_raw(&self, key: &str, value: &str) {
    if let Ok(mut entries) = self.entries.lock() {
      entries.insert(key.to_owned(), value.to_owned());
    }
  }

  /// The raw text currently stored under `key`.
  pub fn raw(&self, key: &str) -> Option<String> {
    self.entries.lock().ok()?.get(key).cloned()
  }
}

impl StorageBackend for MemoryBackend {
  type Error = MemoryError;

  async fn read(&self, key: &str) -> Result<Option<String>, MemoryError> {
    let entries = self.entries.lock().map_err(|_| MemoryError::Poisoned)?;
    Ok(entries.get(key).cloned())
  }

  async fn write(&self, key: &str, value: String) -> Result<(), MemoryError> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(MemoryError::WriteRejected(key.to_owned()));
    }
    let mut entries = self.entries.lock().map_err(|_| MemoryError::Poisoned)?;
    entries.insert(key.to_owned(), value);
    Ok(())
  }
}
