//! Configuration sources and change authors for cfgtree
//!
//! Two independent building blocks:
//!
//! - [`Author`]: a `Name <email>` identity used to attribute changes.
//! - [`ConfigFile`]: one file of a hierarchical configuration tree, able to
//!   resolve labels relative to its own directory. [`SimpleConfigFile`] reads
//!   from the local filesystem, [`MapConfigFile`] serves an in-memory tree.

pub mod author;
pub mod config_file;
pub mod error;
pub mod logging;
pub mod options;

pub use author::Author;
pub use config_file::{ConfigFile, MapConfigFile, SimpleConfigFile, parse_document, resolve_label};
pub use error::{Error, Result};
pub use options::ReadOptions;
