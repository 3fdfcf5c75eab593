//! The [`Record`] trait: what a repository needs to know about an entity.

use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

/// An entity stored as one row of a named collection.
pub trait Record:
  Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// Storage key of the collection holding this entity.
  const COLLECTION: &'static str;

  /// Caller-supplied fields of a new record (everything but the id).
  type Draft: Validate + Send + 'static;

  /// Partial update; `None` fields are left as they are.
  type Patch: Validate + Send + 'static;

  fn id(&self) -> &str;

  fn from_draft(id: String, draft: Self::Draft) -> Self;

  fn apply(&mut self, patch: Self::Patch);

  /// The soft-delete flag. Records returning `None` have no flag and are
  /// discarded from the collection on removal instead.
  fn active_flag_mut(&mut self) -> Option<&mut bool>;

  fn is_active(&self) -> bool;

  /// Sample rows written when the collection is absent and seeding is on.
  fn seed() -> Vec<Self>;
}

/// Copy every `Some` field of a patch onto its target.
macro_rules! merge_patch {
  ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {{
    let patch = $patch;
    $(
      if let Some(value) = patch.$field {
        $target.$field = value;
      }
    )+
  }};
}

pub(crate) use merge_patch;
