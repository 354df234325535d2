//! Directory Module
//!
//! Opens stores by name under a root directory.
//!
//! The root is an explicit value passed to [`DbDirectory::new`]; every
//! relative open through that directory resolves against it.
//!
//! ```text
//!   {root}/
//!     ├── users.json        DbDirectory::open("users.json")
//!     └── cache/
//!         └── tokens.json   DbDirectory::open("cache/tokens.json")
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{JsonKvError, Result};
use crate::storage;
use crate::store::Store;
use crate::value::Value;

/// Root directory that relative store names resolve against
#[derive(Debug, Clone)]
pub struct DbDirectory {
    /// Directory holding the store files
    root: PathBuf,

    /// Template for every store opened here (its path is replaced)
    config: Config,
}

impl DbDirectory {
    /// Use `root` with the default store config
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, Config::default())
    }

    /// Use `root`, opening every store with a copy of `config`
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Open the store `name`, relative to the root
    ///
    /// Creates the root directory if it is missing. Failing to do so is an
    /// `Init` error: no store is returned. Otherwise the store's file, if
    /// any, is loaded before returning.
    pub fn open(&self, name: impl AsRef<Path>) -> Result<FileDb> {
        self.open_at(self.resolve(name))
    }

    /// Open the store at `path` as given, without resolving against the root
    ///
    /// The root directory is still created.
    pub fn open_absolute(&self, path: impl Into<PathBuf>) -> Result<FileDb> {
        self.open_at(path.into())
    }

    /// Path a relative `name` resolves to
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.root.join(name)
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn open_at(&self, path: PathBuf) -> Result<FileDb> {
        storage::ensure_dir(&self.root).map_err(|e| match e {
            JsonKvError::Io(source) => JsonKvError::Init {
                path: self.root.clone(),
                source,
            },
            other => other,
        })?;

        let mut config = self.config.clone();
        config.path = path.clone();
        let store = Store::open(config)?;

        debug!(path = %path.display(), keys = store.len(), "Opened store");
        Ok(FileDb { path, store })
    }
}

/// A store opened through a [`DbDirectory`]
#[derive(Debug)]
pub struct FileDb {
    /// Resolved file path
    path: PathBuf,

    store: Store,
}

impl FileDb {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.store.set(key, value)
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.store.remove(key)
    }

    /// Resolved file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying store, for list and dict operations
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Give up the wrapper, keeping the store
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Nothing is held open between calls, so there is nothing to release
    pub fn close(self) {}
}
