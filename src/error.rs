//! Error types for fatkv
//!
//! Provides a unified error type for all operations.
//!
//! Every engine failure is a distinguishable variant: callers match on the
//! kind, never on message text. Underlying I/O errors are propagated as-is
//! (`Io`), never caught or masked.

use thiserror::Error;

/// Result type alias using FatError
pub type Result<T> = std::result::Result<T, FatError>;

/// Unified error type for fatkv operations
#[derive(Debug, Error)]
pub enum FatError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Codec Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Corrupt record '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    // -------------------------------------------------------------------------
    // Engine Errors (state machine)
    // -------------------------------------------------------------------------
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File is in the recycle bin: {0}")]
    InTrash(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    // -------------------------------------------------------------------------
    // Chain Errors
    // -------------------------------------------------------------------------
    #[error("Broken chain at '{key}': {reason}")]
    BrokenChain { key: String, reason: String },
}
