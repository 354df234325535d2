//! Store Module
//!
//! The store engine: one in-memory dataset bound to one JSON file.
//!
//! ## Responsibilities
//! - Own the dataset and expose every read/write operation
//! - Check value families before touching anything
//! - Dump the full dataset after each successful mutation
//! - Load a previous dump on startup
//!
//! ## Lifecycle
//! ```text
//!   new ──▶ load (optional) ──▶ set / list_* / dict_* ... ──▶ destroy (optional)
//!                                   │
//!                                   └── each mutation ends with dump()
//! ```
//!
//! Operations on lists and dictionaries live in the `list` and `dict`
//! submodules; they are inherent methods of [`Store`] all the same.

mod dict;
mod list;

use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{JsonKvError, Result};
use crate::storage::{self, WriteOptions};
use crate::value::{Dataset, Kind, Value};

/// An in-memory key-value store persisted to a single JSON file
///
/// ## Persistence
/// Every mutating call writes the whole dataset back to `config.path` before
/// returning, and returns the outcome of that write. A mutation that fails
/// its type or range check changes nothing and writes nothing.
///
/// If the write itself fails the mutation stays applied in memory; the file
/// still holds the last successful dump, and a later `dump()` can retry.
///
/// ## Concurrency
/// Mutations take `&mut self`, so a single store is never written from two
/// places at once. Use [`SharedStore`](crate::SharedStore) to share one
/// across threads.
#[derive(Debug)]
pub struct Store {
    /// Store configuration (location, write options)
    config: Config,

    /// Every key and its value, in insertion order
    dataset: Dataset,
}

impl Store {
    /// Create an empty store bound to `config.path`
    ///
    /// Touches nothing on disk; call [`load`](Self::load) to pick up a
    /// previous dump.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dataset: Dataset::new(),
        }
    }

    /// Create a store and load its file if one exists
    pub fn open(config: Config) -> Result<Self> {
        let mut store = Self::new(config);
        store.load()?;
        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified file
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::with_path(path.as_ref()))
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace the dataset with the contents of the backing file
    ///
    /// A missing file is not an error: there is simply nothing to load. On
    /// failure the current dataset is left untouched.
    pub fn load(&mut self) -> Result<()> {
        let path = self.config.path.as_path();
        if !storage::exists(path) {
            debug!(path = %path.display(), "No existing file, starting empty");
            return Ok(());
        }

        match storage::read(path) {
            Ok(dataset) => {
                debug!(path = %path.display(), keys = dataset.len(), "Loaded store");
                self.dataset = dataset;
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load store");
                Err(e)
            }
        }
    }

    /// Write the full dataset to the backing file
    ///
    /// Creates the parent directory first if needed. Dumping twice without
    /// an intervening mutation produces identical bytes.
    pub fn dump(&self) -> Result<()> {
        let path = self.config.path.as_path();
        match storage::write(&self.dataset, path, self.write_options()) {
            Ok(()) => {
                debug!(path = %path.display(), keys = self.dataset.len(), "Dumped store");
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to dump store");
                Err(e)
            }
        }
    }

    // =========================================================================
    // Scalar Operations
    // =========================================================================

    /// Insert or overwrite `key`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.dataset.insert(key.into(), value.into());
        self.dump()
    }

    /// Current value of `key`, if set
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.dataset.get(key)
    }

    /// Delete `key`; removing an unset key still succeeds
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.dataset.shift_remove(key);
        self.dump()
    }

    /// Concatenate `more` onto the text stored at `key`
    ///
    /// Fails with `TypeMismatch` if the key is unset or not text.
    pub fn append(&mut self, key: &str, more: &str) -> Result<()> {
        match self.dataset.get_mut(key) {
            Some(Value::Text(text)) => text.push_str(more),
            other => return Err(JsonKvError::mismatch(key, Kind::Text, other.as_deref())),
        }
        self.dump()
    }

    /// All keys, in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.dataset.keys().cloned().collect()
    }

    /// Whether `key` is set
    pub fn exists(&self, key: &str) -> bool {
        self.dataset.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Clear every key and persist the empty dataset
    ///
    /// The file is kept and rewritten as `{}`.
    pub fn destroy(&mut self) -> Result<()> {
        self.dataset.clear();
        self.dump()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// The opaque persistence option this store was created with
    pub fn options(&self) -> &str {
        &self.config.options
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The whole dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn write_options(&self) -> WriteOptions {
        WriteOptions {
            pretty: self.config.pretty,
            atomic: self.config.atomic_write,
        }
    }
}
