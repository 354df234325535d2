//! List operations
//!
//! Every operation here requires the named key, if set, to hold a list.

use crate::error::{JsonKvError, Result};
use crate::value::{Family, Kind, Value};

use super::Store;

impl Store {
    /// Set `name` to an empty list
    ///
    /// An existing list is reset; any other family is a `TypeMismatch`.
    pub fn list_create(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let current = self.dataset.get(&name);
        if current.is_some_and(|v| v.family() != Family::List) {
            return Err(JsonKvError::mismatch(name, Kind::List, current));
        }
        self.dataset.insert(name, Value::List(Vec::new()));
        self.dump()
    }

    /// Push `value` onto the list at `name`
    pub fn list_add(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.list_mut(name)?.push(value.into());
        self.dump()
    }

    /// Push every element of `seq`, in order, onto the list at `name`
    pub fn list_extend<I>(&mut self, name: &str, seq: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.list_mut(name)?.extend(seq.into_iter().map(Into::into));
        self.dump()
    }

    /// The whole list at `name`
    pub fn list_get_all(&self, name: &str) -> Result<&[Value]> {
        self.list_ref(name).map(Vec::as_slice)
    }

    /// Element `pos` of the list at `name`
    pub fn list_get(&self, name: &str, pos: usize) -> Result<&Value> {
        let list = self.list_ref(name)?;
        list.get(pos).ok_or_else(|| out_of_range(name, pos, list.len()))
    }

    /// Length of the list at `name`
    pub fn list_len(&self, name: &str) -> Result<usize> {
        self.list_ref(name).map(Vec::len)
    }

    /// Remove the list at `name` entirely, returning how many elements it had
    pub fn list_del(&mut self, name: &str) -> Result<usize> {
        let len = self.list_len(name)?;
        self.remove(name)?;
        Ok(len)
    }

    /// Remove and return element `pos`, shifting later elements left
    ///
    /// If the dump fails the element is put back where it was.
    pub fn list_pop(&mut self, name: &str, pos: usize) -> Result<Value> {
        let list = self.list_mut(name)?;
        if pos >= list.len() {
            return Err(out_of_range(name, pos, list.len()));
        }
        let value = list.remove(pos);
        if let Err(e) = self.dump() {
            self.list_mut(name)?.insert(pos, value);
            return Err(e);
        }
        Ok(value)
    }

    /// Concatenate `more` onto the text element at `pos`
    pub fn list_append(&mut self, name: &str, pos: usize, more: &str) -> Result<()> {
        let list = self.list_mut(name)?;
        let len = list.len();
        match list.get_mut(pos) {
            Some(Value::Text(text)) => text.push_str(more),
            Some(other) => {
                return Err(JsonKvError::ElementMismatch {
                    key: name.to_string(),
                    index: pos,
                    expected: Kind::Text,
                    found: other.kind(),
                })
            }
            None => return Err(out_of_range(name, pos, len)),
        }
        self.dump()
    }

    /// Whether the list at `name` contains `value`
    pub fn list_exists(&self, name: &str, value: &Value) -> Result<bool> {
        Ok(self.list_ref(name)?.contains(value))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn list_ref(&self, name: &str) -> Result<&Vec<Value>> {
        match self.dataset.get(name) {
            Some(Value::List(list)) => Ok(list),
            other => Err(JsonKvError::mismatch(name, Kind::List, other)),
        }
    }

    fn list_mut(&mut self, name: &str) -> Result<&mut Vec<Value>> {
        match self.dataset.get_mut(name) {
            Some(Value::List(list)) => Ok(list),
            other => Err(JsonKvError::mismatch(name, Kind::List, other.as_deref())),
        }
    }
}

fn out_of_range(name: &str, index: usize, len: usize) -> JsonKvError {
    JsonKvError::IndexOutOfRange {
        key: name.to_string(),
        index,
        len,
    }
}
