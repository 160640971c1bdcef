//! Segment Module
//!
//! Content chains: arbitrarily long file content represented as a singly
//! linked, forward-only chain of bounded segments, each persisted as an
//! independent durable record.
//!
//! ## Record Layout (per segment, bincode payload inside a codec frame)
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ data: String (≤ 20 characters)                │
//! │ next: Option<String> (key of next segment)    │
//! │ is_last: bool (terminal marker)               │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Key Naming
//! Segments of file `notes` are keyed `notes_segment1`, `notes_segment2`, …
//! in chain order. Keys are derived from the owning file's name plus a
//! running 1-based index, so a rewrite of the same file reuses the same head
//! key.

mod chain;

use serde::{Deserialize, Serialize};

pub use chain::{ChainIter, SegmentStore};

// =============================================================================
// Shared Constants
// =============================================================================

/// Maximum characters of content per segment
pub const MAX_SEGMENT_CHARS: usize = 20;

/// Hop budget for chain traversal. A chain longer than this is treated as
/// broken: links are data, and nothing structurally prevents a corrupted
/// record from pointing backwards.
pub const CHAIN_TRAVERSAL_LIMIT: usize = 1 << 20;

// =============================================================================
// Segment Record
// =============================================================================

/// One node of a content chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Bounded slice of the file's content, at most [`MAX_SEGMENT_CHARS`] chars
    pub data: String,

    /// Key of the next segment; `None` exactly when this is the last
    pub next: Option<String>,

    /// Terminal marker, redundant with `next.is_none()` — both must agree
    pub is_last: bool,
}

impl Segment {
    /// Check the terminator/link agreement invariant
    pub fn is_well_formed(&self) -> bool {
        self.is_last == self.next.is_none()
    }
}

/// Key of segment `index` (1-based) in the chain owned by `name`
pub fn segment_key(name: &str, index: usize) -> String {
    format!("{}_segment{}", name, index)
}
