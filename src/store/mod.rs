//! Record Store Module
//!
//! The flat persistent key-value medium underneath the engine.
//!
//! ## Responsibilities
//! - Durable storage of opaque records addressed by string keys
//! - No knowledge of chains, metadata, or file semantics
//! - Pluggable: the engine is written against the `RecordStore` trait so the
//!   hard logic (chaining, state transitions) is testable against an
//!   in-memory fake
//!
//! ## Implementations
//! - [`DiskStore`] — one file per record inside a data directory
//! - [`MemoryStore`] — `BTreeMap` behind a mutex, for tests and benchmarks

pub mod codec;

mod disk;
mod memory;

use bytes::Bytes;

use crate::error::Result;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// Capability interface over a flat key-value record medium.
///
/// Keys are opaque strings; values are opaque byte records. All methods take
/// `&self` — implementations provide their own interior mutability.
pub trait RecordStore {
    /// Fetch a record by key. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Upsert a record, overwriting any prior version. The record must be
    /// durable (per the backend's sync policy) before this returns.
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Delete a record. Returns `false` if the key was absent; absence is
    /// not an error.
    fn delete(&self, key: &str) -> Result<bool>;

    /// List all keys currently stored, in unspecified order.
    fn list(&self) -> Result<Vec<String>>;
}
