//! Configuration sources addressed by root-relative paths
//!
//! A [`ConfigFile`] is one file of a configuration tree, for example a
//! workflow definition that pulls in sibling files by relative label.
//! Labels always resolve against the directory of the file doing the
//! resolving, so nested files can reference their own neighbours:
//!
//! ```text
//! /foo          resolve("baz/foo") -> /baz/foo
//! /baz/foo      resolve("bar")     -> /baz/bar   (not /bar)
//! ```
//!
//! # Backings
//!
//! - [`SimpleConfigFile`] - reads from the local filesystem
//! - [`MapConfigFile`] - serves an in-memory map of paths to bytes

mod label;
mod map;
mod simple;

pub use label::resolve_label;
pub use map::MapConfigFile;
pub use simple::SimpleConfigFile;

use crate::{Error, Result};
use cfgtree_fs::{NormalizedPath, format};
use serde::de::DeserializeOwned;
use std::fmt;

/// One addressable file within a configuration tree.
///
/// Implementations are immutable snapshots: the content is fixed when the
/// object is created and resolution always yields a new, independent object.
pub trait ConfigFile: fmt::Debug + Send + Sync {
    /// Root-relative path of this file, `/`-separated and starting with `/`.
    fn path(&self) -> &str;

    /// Raw bytes captured when this file was created.
    fn content(&self) -> Result<&[u8]>;

    /// Resolve `label` relative to the directory containing this file.
    ///
    /// Fails with a label error if the target does not exist, is a
    /// directory, or lies outside the configuration root.
    fn resolve(&self, label: &str) -> Result<Box<dyn ConfigFile>>;

    /// Identity of the underlying source, suitable as a map key.
    fn identifier(&self) -> String {
        self.path().to_string()
    }

    /// Content decoded as UTF-8.
    fn read_content(&self) -> Result<String> {
        let bytes = self.content()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| Error::InvalidUtf8 {
            path: self.path().to_string(),
        })
    }
}

/// Decode a config file into `T`.
///
/// The format is chosen from the extension of [`ConfigFile::path`]: `toml`,
/// `json`, or `yaml`/`yml`.
pub fn parse_document<T: DeserializeOwned>(file: &dyn ConfigFile) -> Result<T> {
    let text = file.read_content()?;
    let path = NormalizedPath::new(file.path());
    Ok(format::decode(&text, &path)?)
}
