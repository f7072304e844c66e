//! Filesystem operations
//!
//! Handles reading compose files and writing generated scripts.

use std::path::Path;

use crate::error::FileError;

/// Read raw content from a file
///
/// Decoding is left to the caller, so a file that opens but is not text is
/// not reported as unreadable.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, FileError> {
    std::fs::read(path).map_err(|e| FileError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write content to a file, replacing whatever was there
///
/// The parent directory must already exist.
pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    std::fs::write(path, content).map_err(|e| FileError::Write {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
