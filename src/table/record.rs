//! FileRecord definition
//!
//! The per-file metadata entity: identity, chain head, size, timestamps, and
//! recycle state.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::FileState;

/// Metadata for one logical file
///
/// Invariants:
/// - `head_segment` always references an existing, terminated chain (a
///   zero-length file still owns a single terminal segment with empty data)
/// - `deleted_at` is `Some` if and only if `recycled` is true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique identifier, immutable after creation
    pub name: String,

    /// Key of the first segment of the content chain
    pub head_segment: String,

    /// True once soft-deleted
    pub recycled: bool,

    /// Character count of the content at last write
    pub total_chars: u64,

    /// Creation timestamp (unix millis)
    pub created_at: u64,

    /// Last content-write timestamp (unix millis)
    pub modified_at: u64,

    /// Soft-delete timestamp (unix millis), set only while recycled
    pub deleted_at: Option<u64>,
}

impl FileRecord {
    /// Build a fresh record for a newly created file
    pub fn new(name: impl Into<String>, head_segment: String, total_chars: u64) -> Self {
        let now = now_millis();
        Self {
            name: name.into(),
            head_segment,
            recycled: false,
            total_chars,
            created_at: now,
            modified_at: now,
            deleted_at: None,
        }
    }

    /// State of this record (never `Absent` — absence means no record)
    pub fn state(&self) -> FileState {
        if self.recycled {
            FileState::Recycled
        } else {
            FileState::Active
        }
    }

    /// Mark as recycled, stamping `deleted_at`
    pub fn recycle(&mut self) {
        self.recycled = true;
        self.deleted_at = Some(now_millis());
    }

    /// Clear the recycled flag and `deleted_at`
    pub fn unrecycle(&mut self) {
        self.recycled = false;
        self.deleted_at = None;
    }

    /// Record a content rewrite: new head, new size, fresh `modified_at`
    pub fn record_rewrite(&mut self, head_segment: String, total_chars: u64) {
        self.head_segment = head_segment;
        self.total_chars = total_chars;
        self.modified_at = now_millis();
    }
}

/// Current wall-clock time as unix millis
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
