//! Shared Store
//!
//! A cloneable, thread-safe handle around a [`Store`].
//!
//! ## Concurrency Model
//! One `parking_lot::Mutex` guards the store. Each call holds it across the
//! whole mutation *and* the dump that follows, so two writers can never
//! interleave their changes with each other's file writes. Reads return owned
//! clones because the lock is released before the caller sees the value.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::store::Store;
use crate::value::Value;

/// Thread-safe handle to a store
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    /// Wrap `store` in a new handle
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store
    ///
    /// Use this for anything beyond the shortcuts below, e.g. list and dict
    /// operations or several mutations that must not interleave.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut store = self.inner.lock();
        f(&mut store)
    }

    /// Clone of the value at `key`, if set
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().get(key).cloned()
    }

    /// Set `key` to `value` and dump
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    /// Remove `key` and dump
    pub fn remove(&self, key: &str) -> Result<()> {
        self.inner.lock().remove(key)
    }

    /// All top-level keys, in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys()
    }

    /// Write the store to its file
    pub fn dump(&self) -> Result<()> {
        self.inner.lock().dump()
    }

    /// Number of live handles to this store
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}
