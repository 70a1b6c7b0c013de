//! Format-agnostic configuration loading

use crate::{Error, NormalizedPath, Result, format, io};
use serde::de::DeserializeOwned;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and handles
/// deserialization transparently.
#[derive(Debug, Default)]
pub struct ConfigStore {
    max_file_size: Option<u64>,
}

impl ConfigStore {
    /// Create a new ConfigStore with no size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ConfigStore that refuses files larger than `max` bytes.
    pub fn with_max_file_size(max: u64) -> Self {
        Self {
            max_file_size: Some(max),
        }
    }

    /// Load configuration from a file.
    ///
    /// See [`format::Format::detect`] for the supported extensions.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        // Reject unsupported formats before touching the disk
        format::Format::detect(path)?;

        let bytes = io::read_bytes(path, self.max_file_size)?;
        let content = String::from_utf8(bytes).map_err(|e| {
            Error::io(
                path.to_native(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;
        format::decode(&content, path)
    }
}
