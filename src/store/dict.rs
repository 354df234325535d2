//! Dictionary operations
//!
//! Every operation here requires the named key, if set, to hold a dict.
//! Inner keys are text and keep their insertion order.

use crate::error::{JsonKvError, Result};
use crate::value::{Dict, Family, Kind, Value};

use super::Store;

impl Store {
    /// Set `name` to an empty dictionary
    ///
    /// An existing dict is reset; any other family is a `TypeMismatch`.
    pub fn dict_create(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let current = self.dataset.get(&name);
        if current.is_some_and(|v| v.family() != Family::Dict) {
            return Err(JsonKvError::mismatch(name, Kind::Dict, current));
        }
        self.dataset.insert(name, Value::Dict(Dict::new()));
        self.dump()
    }

    /// Insert or overwrite `key → value` inside the dict at `name`
    pub fn dict_add(
        &mut self,
        name: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<()> {
        self.dict_mut(name)?.insert(key.into(), value.into());
        self.dump()
    }

    /// Value of `key` inside the dict at `name`, if set
    pub fn dict_get(&self, name: &str, key: &str) -> Result<Option<&Value>> {
        Ok(self.dict_ref(name)?.get(key))
    }

    /// The whole dict at `name`
    pub fn dict_get_all(&self, name: &str) -> Result<&Dict> {
        self.dict_ref(name)
    }

    /// Remove the dict at `name` entirely; an unset name still succeeds
    pub fn dict_remove(&mut self, name: &str) -> Result<()> {
        let current = self.dataset.get(name);
        if current.is_some_and(|v| v.family() != Family::Dict) {
            return Err(JsonKvError::mismatch(name, Kind::Dict, current));
        }
        self.remove(name)
    }

    /// Remove and return `key` from the dict at `name`
    ///
    /// If the dump fails the entry is put back at its old position.
    pub fn dict_pop(&mut self, name: &str, key: &str) -> Result<Option<Value>> {
        let removed = self.dict_mut(name)?.shift_remove_full(key);
        if let Err(e) = self.dump() {
            if let Some((index, key, value)) = removed {
                self.dict_mut(name)?.shift_insert(index, key, value);
            }
            return Err(e);
        }
        Ok(removed.map(|(_, _, value)| value))
    }

    /// Keys of the dict at `name`, in insertion order
    pub fn dict_keys(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.dict_ref(name)?.keys().cloned().collect())
    }

    /// Values of the dict at `name`, in the same order as [`dict_keys`](Self::dict_keys)
    pub fn dict_values(&self, name: &str) -> Result<Vec<Value>> {
        Ok(self.dict_ref(name)?.values().cloned().collect())
    }

    /// Whether `key` is set inside the dict at `name`
    pub fn dict_exists(&self, name: &str, key: &str) -> Result<bool> {
        Ok(self.dict_ref(name)?.contains_key(key))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn dict_ref(&self, name: &str) -> Result<&Dict> {
        match self.dataset.get(name) {
            Some(Value::Dict(dict)) => Ok(dict),
            other => Err(JsonKvError::mismatch(name, Kind::Dict, other)),
        }
    }

    fn dict_mut(&mut self, name: &str) -> Result<&mut Dict> {
        match self.dataset.get_mut(name) {
            Some(Value::Dict(dict)) => Ok(dict),
            other => Err(JsonKvError::mismatch(name, Kind::Dict, other.as_deref())),
        }
    }
}
