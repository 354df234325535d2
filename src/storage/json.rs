//! JSON codec
//!
//! Whole-dataset encoding plus file read/write on top of it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{JsonKvError, Result};
use crate::value::Dataset;

use super::fs::replace_file;
use super::WriteOptions;

/// Encode a dataset as a JSON object
pub fn encode(dataset: &Dataset, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(dataset)
    } else {
        serde_json::to_vec(dataset)
    };
    bytes.map_err(|e| JsonKvError::Encode(e.to_string()))
}

/// Decode a JSON object into a dataset
///
/// Fails if the bytes aren't JSON or the root isn't an object. `path` is only
/// used to label the error.
pub fn decode(bytes: &[u8], path: &Path) -> Result<Dataset> {
    serde_json::from_slice(bytes).map_err(|e| JsonKvError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read and decode the file at `path`
///
/// Returns `NotFound` if the file does not exist.
pub fn read(path: &Path) -> Result<Dataset> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(JsonKvError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(JsonKvError::Io(e)),
    };
    decode(&bytes, path)
}

/// Encode `dataset` and replace the file at `path` with it
///
/// Creates the parent directory if it is missing.
pub fn write(dataset: &Dataset, path: &Path, options: WriteOptions) -> Result<()> {
    let bytes = encode(dataset, options.pretty)?;
    replace_file(path, &bytes, options.atomic)
}
