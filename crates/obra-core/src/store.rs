//! The `StorageBackend` trait.
//!
//! A backend is a flat key-value medium holding one text entry per
//! collection. It knows nothing about records, parsing, or notifications;
//! those live in [`crate::hub`]. Implemented by [`crate::memory::MemoryBackend`]
//! for tests and by `obra-store-sqlite` for on-disk persistence.

use std::future::Future;

/// Abstraction over the persistent key-value medium behind every collection.
///
/// All methods return `Send` futures so a hub can be shared across tasks of a
/// multi-threaded tokio runtime.
pub trait StorageBackend: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the raw text stored under `key`. Returns `None` if the key has never
  /// been written.
  fn read<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Replace the entry under `key` with `value`.
  fn write<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
