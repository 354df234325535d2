//! Storage Module
//!
//! Persistent storage layer: one JSON document per store.
//!
//! ## Responsibilities
//! - Encode the dataset to JSON bytes and decode it back
//! - Read a whole file into a dataset
//! - Replace a file with a new dataset (write-then-rename when atomic)
//! - Create missing directories
//!
//! Nothing here touches a store's in-memory state.
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ {                                      │
//! │   "<key>": <value>,                    │
//! │   "<key>": [ <value>, ... ],           │
//! │   "<key>": { "<key>": <value>, ... }   │
//! │ }                                      │
//! └────────────────────────────────────────┘
//! ```
//! The root is always an object. A destroyed store is `{}`.

mod fs;
mod json;

pub use fs::{ensure_dir, exists, temp_path};
pub use json::{decode, encode, read, write};

/// How a dataset is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Indented JSON instead of compact
    pub pretty: bool,

    /// Write to a temp file, then rename over the target
    pub atomic: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            atomic: true,
        }
    }
}
