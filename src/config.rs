//! Configuration for Rollbook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default database file, shared by the menu and the form front ends
pub const DEFAULT_DB_FILE: &str = "student.db";

/// Main configuration for a Rollbook store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Where the student table lives
    pub location: StoreLocation,

    /// How long SQLite waits on a locked database file (milliseconds)
    pub busy_timeout_ms: u64,
}

/// Backing location of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A SQLite database file (created if missing)
    File(PathBuf),

    /// A private in-memory database, dropped with the store
    Memory,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: StoreLocation::File(PathBuf::from(DEFAULT_DB_FILE)),
            busy_timeout_ms: 5000,
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
    /// Store records in the given database file
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.location = StoreLocation::File(path.into());
        self
    }

    /// Store records in memory only
    pub fn in_memory(mut self) -> Self {
        self.config.location = StoreLocation::Memory;
        self
    }

    /// Set the busy timeout (in milliseconds)
    pub fn busy_timeout_ms(mut self, ms: u64) -> Self {
        self.config.busy_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
