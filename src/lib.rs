//! # jsonkv
//!
//! An embedded key-value store for small single-process tools:
//! - The whole dataset lives in memory
//! - Values are scalars, ordered lists, or text-keyed dictionaries
//! - Every mutation rewrites one human-readable JSON file
//! - Type-checked operations: a list op on a text key is an error, not a panic
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DbDirectory                              │
//! │            (name → {root}/name, opens + loads)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Store                                  │
//! │      get / set / append / list_* / dict_* / destroy          │
//! │         (optionally shared through SharedStore)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  load at open, dump after every write
//!                       ▼
//!               ┌───────────────┐
//!               │    Storage    │
//!               │ (JSON file)   │
//!               └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use jsonkv::{Store, Value};
//!
//! let mut store = Store::open_path("/tmp/example.json")?;
//! store.set("name", "jsonkv")?;
//! store.list_create("tags")?;
//! store.list_add("tags", "embedded")?;
//! assert_eq!(store.get("name"), Some(&Value::from("jsonkv")));
//! # Ok::<(), jsonkv::JsonKvError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod storage;
pub mod store;
pub mod shared;
pub mod directory;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{JsonKvError, Result};
pub use config::{Config, ConfigBuilder};
pub use value::{Dataset, Dict, Family, Kind, Value};
pub use store::Store;
pub use shared::SharedStore;
pub use directory::{DbDirectory, FileDb};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of jsonkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
