//! Scratch directories for per-application intermediate files
//!
//! Temporary directories are always created under an absolute base, never
//! under the current working directory (e.g. when TMPDIR=tmp).

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, io_error};

/// Prefix of scratch directory names
pub const SCRATCH_PREFIX: &str = "scriptdocs-";

/// Returns an absolute directory suitable for creating temporary directories.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a scratch directory, removed when the returned value is dropped
pub fn scratch_dir() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir_in(temp_dir_base())
        .map_err(|e| io_error(format!("Failed to create scratch directory: {e}")))
}
