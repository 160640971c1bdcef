//! In-memory record store
//!
//! A `BTreeMap` behind a mutex. Used as the test/benchmark fake so the engine
//! logic can be exercised without touching real storage.

use std::collections::BTreeMap;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::error::Result;

use super::RecordStore;

/// In-memory record store
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, Bytes>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored
    pub fn record_count(&self) -> usize {
        self.records.lock().len()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        // Bytes clones are cheap (refcounted), so handing out copies is fine
        Ok(self.records.lock().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.records
            .lock()
            .insert(key.to_string(), Bytes::copy_from_slice(bytes));
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.records.lock().remove(key).is_some())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.records.lock().keys().cloned().collect())
    }
}
