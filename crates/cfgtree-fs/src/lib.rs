//! Filesystem layer for cfgtree
//!
//! Provides forward-slash path normalization, bounded file reads and
//! format-agnostic decoding of configuration documents.

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
