//! Configuration for fatkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a fatkv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all durable records.
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── <name>.fat           (one metadata record per file)
    ///     └── <name>_segment<N>    (one record per chain segment)
    pub data_dir: PathBuf,

    /// Sync policy: when to fsync record files
    pub sync_policy: SyncPolicy,
}

/// Durability policy for record writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// fsync after every record write (safest, slowest)
    EveryWrite,

    /// Leave flushing to the OS page cache (fast, survives process crash
    /// but not power loss)
    OsManaged,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./fatkv_data"),
            sync_policy: SyncPolicy::OsManaged,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all records)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the sync policy
    pub fn sync_policy(mut self, policy: SyncPolicy) -> Self {
        self.config.sync_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
