//! File system helpers
//!
//! Existence checks, directory creation, and whole-file replacement.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// True only if `path` names a regular file (directories don't count)
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Create `path` and all missing parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Sibling temp file used for atomic writes
/// "store.json" → "store.json.tmp"
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("jsonkv"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the contents of `path` with `bytes`
///
/// With `atomic` set, the bytes are written and synced to a temp file which
/// is then renamed over `path`; a failure leaves the old file intact and the
/// temp file removed. Otherwise `path` is truncated and overwritten in place.
pub(crate) fn replace_file(path: &Path, bytes: &[u8], atomic: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            ensure_dir(parent)?;
        }
    }

    if !atomic {
        fs::write(path, bytes)?;
        return Ok(());
    }

    let tmp = temp_path(path);
    let result = write_synced(&tmp, bytes).and_then(|()| fs::rename(&tmp, path).map_err(Into::into));
    if result.is_err() {
        // The temp file may not exist; keep the first error
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
