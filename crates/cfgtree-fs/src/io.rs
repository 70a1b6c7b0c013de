//! Bounded read operations

use crate::{Error, NormalizedPath, Result};
use std::fs;

/// Read the raw bytes of a file.
///
/// When `max_size` is set the file's metadata is checked first and files
/// larger than the limit are rejected without being read.
pub fn read_bytes(path: &NormalizedPath, max_size: Option<u64>) -> Result<Vec<u8>> {
    let native_path = path.to_native();

    if let Some(max) = max_size {
        let size = fs::metadata(&native_path)
            .map_err(|e| Error::io(&native_path, e))?
            .len();
        if size > max {
            return Err(Error::FileTooLarge {
                path: native_path,
                size,
                max,
            });
        }
    }

    let content = fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    tracing::debug!(path = %path, bytes = content.len(), "Read file");
    Ok(content)
}

/// Resolve symlinks and relative components against the real filesystem.
///
/// Uses `dunce` so Windows paths come back without the `\\?\` prefix.
pub fn canonicalize(path: impl AsRef<std::path::Path>) -> Result<NormalizedPath> {
    let path = path.as_ref();
    dunce::canonicalize(path)
        .map(NormalizedPath::new)
        .map_err(|e| Error::io(path, e))
}
