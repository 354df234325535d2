//! Configuration for jsonkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Configuration for a single store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Location
    // -------------------------------------------------------------------------
    /// Path of the JSON file backing the store
    pub path: PathBuf,

    /// Opaque persistence option. Stored with the store, never interpreted.
    pub options: String,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// Indent the JSON file for human readers
    pub pretty: bool,

    /// Write to a sibling temp file and rename it over the target
    pub atomic_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./jsonkv.json"),
            options: String::new(),
            pretty: false,
            atomic_write: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default config pointing at `path`
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::builder().path(path).build()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the opaque persistence option
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.config.options = options.into();
        self
    }

    /// Pretty-print the JSON file
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Enable or disable write-then-rename dumps
    pub fn atomic_write(mut self, atomic: bool) -> Self {
        self.config.atomic_write = atomic;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
