//! # fatkv
//!
//! A minimal FAT-style storage engine atop a flat key-value record medium:
//! - Named logical files stored as chains of bounded segments (≤ 20 chars)
//! - Per-file metadata records with size, timestamps, and soft-delete state
//! - Create / read / update / soft-delete / restore / list operations
//! - Pluggable record store (disk-backed or in-memory)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLI Shell                               │
//! │               (external caller, out of core)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │        (state machine, cross-entity invariants)              │
//! └─────────┬─────────────────────────────────┬─────────────────┘
//!           │                                 │
//!           ▼                                 ▼
//!   ┌───────────────┐                 ┌───────────────┐
//!   │ MetadataTable │                 │ SegmentStore  │
//!   │ (<name>.fat)  │                 │ (chains)      │
//!   └───────┬───────┘                 └───────┬───────┘
//!           │                                 │
//!           └──────────────┬──────────────────┘
//!                          ▼
//!                  ┌──────────────┐
//!                  │ RecordStore  │
//!                  │ (disk / mem) │
//!                  └──────────────┘
//! ```
//!
//! The engine is single-threaded by contract; see the `engine` module docs
//! for the concurrency model and known limitations.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod segment;
pub mod table;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FatError, Result};
pub use config::{Config, SyncPolicy};
pub use engine::Engine;
pub use segment::{Segment, SegmentStore, MAX_SEGMENT_CHARS};
pub use store::{DiskStore, MemoryStore, RecordStore};
pub use table::{FileRecord, FileState, MetadataTable};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fatkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
