//! [`Collection`]: one consumer's typed binding to a named collection.

use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::{
  hub::{CollectionHub, Subscription},
  store::StorageBackend,
};

/// The rows of one collection as seen by one consumer.
///
/// A binding loads once when created and afterwards follows the saves of
/// every other binding on the same hub and key; reads never go back to
/// storage. Dropping the binding drops its subscription.
pub struct Collection<T, B> {
  hub:          Arc<CollectionHub<B>>,
  key:          String,
  rows:         Vec<T>,
  subscription: Subscription,
  /// The value this binding last published; seeing it again is a no-op.
  own_save:     Option<Arc<Value>>,
}

impl<T, B> Collection<T, B>
where
  T: Serialize + DeserializeOwned + Send + Sync,
  B: StorageBackend,
{
  /// Subscribe to `key` and load its current rows, falling back to
  /// `default`.
  pub async fn bind(
    hub: Arc<CollectionHub<B>>,
    key: impl Into<String>,
    default: Vec<T>,
  ) -> Self {
    let key = key.into();
    // Subscribe first so a save racing with the load is not missed.
    let subscription = hub.subscribe(&key);
    let rows = hub.load(&key, default).await;
    Self {
      hub,
      key,
      rows,
      subscription,
      own_save: None,
    }
  }

  pub fn key(&self) -> &str { &self.key }

  /// The latest rows, including saves made through other bindings.
  pub fn current(&mut self) -> &[T] {
    self.sync();
    &self.rows
  }

  /// Replace every row and persist.
  pub async fn replace(&mut self, rows: Vec<T>) {
    self.rows = rows;
    self.persist().await;
  }

  /// Apply `f` to the latest rows. The collection is persisted and
  /// broadcast only when `f` returns `Ok`; on `Err` it must leave the rows
  /// untouched.
  pub async fn mutate<R, E, F>(&mut self, f: F) -> Result<R, E>
  where
    F: FnOnce(&mut Vec<T>) -> Result<R, E> + Send,
    R: Send,
    E: Send,
  {
    self.sync();
    let out = f(&mut self.rows)?;
    self.persist().await;
    Ok(out)
  }

  fn sync(&mut self) {
    let Some(value) = self.subscription.take_update() else {
      return;
    };
    if self.own_save.as_ref().is_some_and(|own| Arc::ptr_eq(own, &value)) {
      return;
    }
    match Vec::<T>::deserialize(value.as_ref()) {
      Ok(rows) => self.rows = rows,
      Err(e) => {
        warn!(key = %self.key, error = %e, "ignoring malformed collection update");
      }
    }
  }

  async fn persist(&mut self) {
    self.own_save = self.hub.save(&self.key, self.rows.as_slice()).await;
  }
}
