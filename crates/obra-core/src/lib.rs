//! Core types and the persisted-collection machinery for the Obra
//! construction-company workspace.
//!
//! Every entity lives in a named collection stored as one JSON array behind a
//! [`store::StorageBackend`]. A [`hub::CollectionHub`] loads and saves those
//! collections and tells every live consumer of a key about each save;
//! [`repo::Repository`] layers typed add/update/remove on top.
//!
//! This crate is free of database dependencies; `obra-store-sqlite` provides
//! the on-disk backend.

// Backends implement the trait with plain `async fn`; the `Send` bounds live
// on the trait declarations in `store.rs`.
#![allow(async_fn_in_trait)]

pub mod collection;
pub mod contact;
pub mod dashboard;
pub mod employee;
pub mod error;
pub mod hub;
pub mod ids;
pub mod inspection;
pub mod inventory;
pub mod lookup;
pub mod memory;
pub mod numeric;
pub mod project;
pub mod record;
pub mod repo;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
pub use hub::CollectionHub;
pub use memory::MemoryBackend;
pub use record::Record;
pub use repo::Repository;
