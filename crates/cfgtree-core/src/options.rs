//! Read options for filesystem-backed config files

use crate::Result;
use cfgtree_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

/// Options applied when a [`SimpleConfigFile`](crate::SimpleConfigFile)
/// reads a file, and inherited by every file it resolves.
///
/// Can be loaded from a TOML, JSON or YAML document:
///
/// ```toml
/// max_file_size = 1048576
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Largest file, in bytes, that may be read. `None` means unbounded.
    pub max_file_size: Option<u64>,
}

impl ReadOptions {
    pub fn with_max_file_size(max: u64) -> Self {
        Self {
            max_file_size: Some(max),
        }
    }

    /// Load options from a document, format chosen by extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let options = ConfigStore::new().load(path)?;
        tracing::debug!(?options, path = %path, "Loaded read options");
        Ok(options)
    }
}
