//! Disk-backed record store
//!
//! One file per record inside a flat data directory. The directory is the
//! whole medium: keys map 1:1 to file names, discovery is a directory scan.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::config::SyncPolicy;
use crate::error::Result;

use super::RecordStore;

/// File-per-record store rooted at a data directory
pub struct DiskStore {
    /// Directory holding one file per record
    data_dir: PathBuf,

    /// Whether to fsync after each write
    sync_policy: SyncPolicy,
}

impl DiskStore {
    /// Open or create a store in the given directory
    pub fn open(path: &Path, sync_policy: SyncPolicy) -> Result<Self> {
        fs::create_dir_all(path)?;

        Ok(Self {
            data_dir: path.to_path_buf(),
            sync_policy,
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(key)
    }
}

impl RecordStore for DiskStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        match fs::read(self.record_path(key)) {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.record_path(key))?;

        file.write_all(bytes)?;

        if self.sync_policy == SyncPolicy::EveryWrite {
            file.sync_all()?;
        }

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            if entry.path().is_file() {
                keys.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(keys)
    }
}
