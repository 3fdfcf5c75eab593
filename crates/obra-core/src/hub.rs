//! [`CollectionHub`]: named JSON collections over a [`StorageBackend`], with
//! in-process change notification.
//!
//! Every collection lives under one key as a JSON array. Reads fall back to a
//! caller-supplied default on any failure; writes never fail from the
//! caller's point of view. After each save the new value is published on the
//! key's channel so every other live [`Subscription`] to that key observes it.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, PoisonError},
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::store::StorageBackend;

type Channel = watch::Sender<Option<Arc<Value>>>;

// ─── Hub ─────────────────────────────────────────────────────────────────────

/// Shared entry point to every collection of one workspace.
///
/// Wrap it in an [`Arc`] and hand clones to each consumer; bindings created
/// from the same hub see each other's saves.
pub struct CollectionHub<B> {
  backend:  B,
  channels: Mutex<HashMap<String, Channel>>,
  seeding:  bool,
}

impl<B: StorageBackend> CollectionHub<B> {
  pub fn new(backend: B) -> Self {
    Self {
      backend,
      channels: Mutex::new(HashMap::new()),
      seeding: false,
    }
  }

  /// Seed each collection with the built-in sample records the first time a
  /// repository opens it.
  pub fn with_seeding(mut self, seeding: bool) -> Self {
    self.seeding = seeding;
    self
  }

  pub fn seeding(&self) -> bool { self.seeding }

  pub fn backend(&self) -> &B { &self.backend }

  /// Read the value stored under `key`.
  ///
  /// An absent entry, a backend read error, and unparsable text all yield
  /// `default`. Failures are logged, never returned.
  pub async fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
    match self.backend.read(key).await {
      Ok(None) => default,
      Ok(Some(text)) => match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
          warn!(key, error = %e, "stored collection is corrupt, using default");
          default
        }
      },
      Err(e) => {
        warn!(key, error = %e, "failed to read collection, using default");
        default
      }
    }
  }

  /// Serialize `value`, write it under `key`, and notify subscribers.
  ///
  /// A failed write is logged and subscribers are still notified, so live
  /// consumers move on even when persistence did not. Concurrent saves to
  /// the same key are last-write-wins.
  ///
  /// Returns the published value, or `None` when serialization failed and
  /// nothing was written or published.
  pub async fn save<T>(&self, key: &str, value: &T) -> Option<Arc<Value>>
  where
    T: Serialize + Sync + ?Sized,
  {
    let json = match serde_json::to_value(value) {
      Ok(json) => json,
      Err(e) => {
        warn!(key, error = %e, "failed to serialize collection");
        return None;
      }
    };

    match self.backend.write(key, json.to_string()).await {
      Ok(()) => debug!(key, "collection saved"),
      Err(e) => {
        warn!(key, error = %e, "failed to persist collection, keeping in-memory state");
      }
    }

    Some(self.publish(key, json))
  }

  /// Write `rows` under `key` only if the key has never been written.
  ///
  /// Returns `true` when the rows were written. A present entry is left
  /// alone even if it is corrupt.
  pub async fn seed_if_absent<T>(&self, key: &str, rows: &T) -> bool
  where
    T: Serialize + Sync + ?Sized,
  {
    match self.backend.read(key).await {
      Ok(None) => {}
      Ok(Some(_)) => return false,
      Err(e) => {
        warn!(key, error = %e, "failed to check collection before seeding");
        return false;
      }
    }

    let text = match serde_json::to_string(rows) {
      Ok(text) => text,
      Err(e) => {
        warn!(key, error = %e, "failed to serialize seed rows");
        return false;
      }
    };

    match self.backend.write(key, text).await {
      Ok(()) => {
        info!(key, "seeded collection with sample records");
        true
      }
      Err(e) => {
        warn!(key, error = %e, "failed to seed collection");
        false
      }
    }
  }

  /// Start listening for saves to `key`. Dropping the returned handle
  /// unregisters it.
  pub fn subscribe(&self, key: &str) -> Subscription {
    let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
    let rx = channels
      .entry(key.to_owned())
      .or_insert_with(|| watch::channel(None).0)
      .subscribe();
    Subscription {
      key: key.to_owned(),
      rx,
    }
  }

  /// Number of live subscriptions to `key`.
  pub fn subscriber_count(&self, key: &str) -> usize {
    let channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
    channels.get(key).map_or(0, |tx| tx.receiver_count())
  }

  fn publish(&self, key: &str, value: Value) -> Arc<Value> {
    let value = Arc::new(value);
    let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
    channels
      .entry(key.to_owned())
      .or_insert_with(|| watch::channel(None).0)
      .send_replace(Some(Arc::clone(&value)));
    value
  }
}

// ─── Subscription ────────────────────────────────────────────────────────────

/// A live registration for change events on one key.
///
/// Only the latest published value is retained; intermediate saves that
/// happen between two checks collapse into one update.
#[derive(Debug)]
pub struct Subscription {
  key: String,
  rx:  watch::Receiver<Option<Arc<Value>>>,
}

impl Subscription {
  pub fn key(&self) -> &str { &self.key }

  /// The value published since the last check, if any.
  pub fn take_update(&mut self) -> Option<Arc<Value>> {
    if !self.rx.has_changed().unwrap_or(false) {
      return None;
    }
    (*self.rx.borrow_and_update()).clone()
  }

  /// Wait for the next save to this key.
  ///
  /// Returns `None` once the hub has been dropped.
  pub async fn changed(&mut self) -> Option<Arc<Value>> {
    self.rx.changed().await.ok()?;
    (*self.rx.borrow_and_update()).clone()
  }

}
