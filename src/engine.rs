//! Engine Module
//!
//! The storage engine that composes the metadata table and the segment
//! store. This is the only component exposed to callers; it owns every
//! cross-entity invariant (chain completeness, metadata/chain consistency)
//! and the per-name state machine.
//!
//! ## State Machine (per file name)
//!
//! ```text
//!              create                soft_delete
//!   Absent ──────────────▶ Active ──────────────▶ Recycled
//!                            ▲                       │
//!                            └───────────────────────┘
//!                                    restore
//! ```
//!
//! `read` and `update` are only legal in `Active`; both fail with `InTrash`
//! on a recycled file and `NotFound` on an absent one. `create` on any
//! existing name fails with `AlreadyExists`; it never silently replaces a
//! record or leaks its chain.
//!
//! ## Concurrency Model
//!
//! Single-threaded, synchronous, run-to-completion. The engine is **not**
//! safe for concurrent invocation from multiple threads or processes:
//! create/update/delete are multi-step read-modify-write sequences with no
//! isolation. Callers that introduce concurrency must serialize access
//! externally (a per-name lock or a single-writer queue).
//!
//! ## Known Limitation
//!
//! Update is purge-then-rewrite with no two-phase commit: a crash between
//! the purge and the metadata write can leave an orphaned old or new chain
//! with no record referencing it. Accepted trade-off: the rewrite is never
//! interleaved with stale segments, and restore stays O(1) metadata-only.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{FatError, Result};
use crate::segment::SegmentStore;
use crate::store::{DiskStore, RecordStore};
use crate::table::{FileRecord, FileState, MetadataTable};

/// The FAT-style storage engine
pub struct Engine<S = DiskStore> {
    /// Per-file metadata records
    table: MetadataTable<S>,

    /// Content chains
    segments: SegmentStore<S>,
}

impl Engine<DiskStore> {
    /// Open or create an engine with the given config
    pub fn open(config: Config) -> Result<Self> {
        let store = DiskStore::open(&config.data_dir, config.sync_policy)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let mut config = Config::default();
        config.data_dir = path.to_path_buf();
        Self::open(config)
    }
}

impl<S: RecordStore> Engine<S> {
    /// Build an engine over any record store (in-memory for tests)
    pub fn with_store(store: Arc<S>) -> Self {
        Self {
            table: MetadataTable::new(store.clone()),
            segments: SegmentStore::new(store),
        }
    }

    /// Create a new file with the given content
    ///
    /// Fails with `AlreadyExists` if the name is taken, whether the existing
    /// file is active or recycled. The chain is written before the metadata
    /// record, so a record never references a chain that was not persisted.
    pub fn create(&self, name: &str, content: &str) -> Result<FileRecord> {
        if self.table.state(name)? != FileState::Absent {
            return Err(FatError::AlreadyExists(name.to_string()));
        }

        let head = self.segments.write_chain(name, content)?;
        let record = FileRecord::new(name, head, count_chars(content));
        self.table.put(&record)?;

        info!(name, chars = record.total_chars, "created file");
        Ok(record)
    }

    /// Read a file's content and metadata
    pub fn read(&self, name: &str) -> Result<(FileRecord, String)> {
        let record = self.active_record(name)?;
        let content = self.segments.read_chain(&record.head_segment)?;

        debug!(name, chars = record.total_chars, "read file");
        Ok((record, content))
    }

    /// Replace a file's content wholesale
    ///
    /// Purges the old chain, writes the new one, then updates the record's
    /// head reference, size, and `modified_at`.
    pub fn update(&self, name: &str, new_content: &str) -> Result<FileRecord> {
        let mut record = self.active_record(name)?;

        self.segments.purge_chain(&record.head_segment)?;
        let head = self.segments.write_chain(name, new_content)?;

        record.record_rewrite(head, count_chars(new_content));
        self.table.put(&record)?;

        info!(name, chars = record.total_chars, "updated file");
        Ok(record)
    }

    /// Move a file to the recycle bin
    ///
    /// Metadata-only: the content chain is untouched, which keeps restore
    /// O(1). Fails with `InTrash` if the file is already recycled.
    pub fn soft_delete(&self, name: &str) -> Result<()> {
        let mut record = self.active_record(name)?;

        record.recycle();
        self.table.put(&record)?;

        info!(name, "moved file to recycle bin");
        Ok(())
    }

    /// Bring a file back from the recycle bin
    ///
    /// Clears the recycled flag and `deleted_at`. Restoring an already
    /// active file is an idempotent no-op; an absent name fails `NotFound`.
    pub fn restore(&self, name: &str) -> Result<()> {
        let mut record = self.table.get(name)?;

        if !record.recycled {
            return Ok(());
        }

        record.unrecycle();
        self.table.put(&record)?;

        info!(name, "restored file from recycle bin");
        Ok(())
    }

    /// All file records, recycled ones included, in unspecified order
    ///
    /// Callers (the CLI shell) are responsible for filtering recycled
    /// entries and for ordering.
    pub fn list(&self) -> Result<Vec<FileRecord>> {
        self.table.list_all()
    }

    /// Fetch the record for `name`, enforcing the Active precondition
    fn active_record(&self, name: &str) -> Result<FileRecord> {
        let record = self.table.get(name)?;
        match record.state() {
            FileState::Active => Ok(record),
            _ => Err(FatError::InTrash(name.to_string())),
        }
    }
}

/// Logical size of content in characters (the unit `MAX_SEGMENT_CHARS`
/// bounds), not bytes
fn count_chars(content: &str) -> u64 {
    content.chars().count() as u64
}
