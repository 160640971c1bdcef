//! MetadataTable implementation
//!
//! Upsert/lookup/scan of FileRecords over a shared record store.

use std::sync::Arc;

use crate::error::{FatError, Result};
use crate::store::{codec, RecordStore};

use super::{metadata_key, FileRecord, FileState};

/// Durable table of FileRecords, one per file name
pub struct MetadataTable<S> {
    store: Arc<S>,
}

impl<S: RecordStore> MetadataTable<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Upsert a record keyed by its name, overwriting any prior version
    pub fn put(&self, record: &FileRecord) -> Result<()> {
        let frame = codec::encode_record(record)?;
        self.store.put(&metadata_key(&record.name), &frame)
    }

    /// Fetch the record for `name`, failing with `NotFound` if absent
    pub fn get(&self, name: &str) -> Result<FileRecord> {
        self.try_get(name)?
            .ok_or_else(|| FatError::NotFound(name.to_string()))
    }

    /// Fetch the record for `name`, or `None` if absent
    pub fn try_get(&self, name: &str) -> Result<Option<FileRecord>> {
        let key = metadata_key(name);
        match self.store.get(&key)? {
            Some(bytes) => Ok(Some(codec::decode_record(&key, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Tri-state lookup: Active, Recycled, or Absent
    pub fn state(&self, name: &str) -> Result<FileState> {
        Ok(match self.try_get(name)? {
            Some(record) => record.state(),
            None => FileState::Absent,
        })
    }

    /// All records currently stored, in unspecified order.
    ///
    /// Non-metadata keys sharing the store (segment records) are skipped.
    pub fn list_all(&self) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();

        for key in self.store.list()? {
            if !key.ends_with(".fat") {
                continue;
            }
            if let Some(bytes) = self.store.get(&key)? {
                records.push(codec::decode_record(&key, &bytes)?);
            }
        }

        Ok(records)
    }
}
