//! Error types for `obra-core`.
//!
//! Storage failures never appear here: the hub swallows and logs them so the
//! in-memory state keeps moving. What remains are the outcomes a caller may
//! want to surface: lookup misses and invalid input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{collection} record not found: {id}")]
  NotFound {
    collection: &'static str,
    id:         String,
  },

  #[error("invalid input: {0}")]
  Validation(#[from] validator::ValidationErrors),

  #[error("not a number: {0:?}")]
  InvalidNumber(String),
}

impl Error {
  pub(crate) fn not_found(collection: &'static str, id: &str) -> Self {
    Self::NotFound {
      collection,
      id: id.to_owned(),
    }
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
