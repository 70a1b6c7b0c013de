//! [`TestTree`] builder for configuration-tree test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out as a configuration tree.
///
/// Paths passed to the helpers are root-relative and may start with `/`.
///
/// # Example
///
/// ```rust
/// use cfgtree_test_utils::TestTree;
///
/// let tree = TestTree::new()
///     .with_file("/foo", "foo")
///     .with_file("/baz/foo", "bazfoo");
/// tree.assert_file_exists("baz/foo");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("TestTree::new: failed to create temp dir: {e}")),
        }
    }

    /// The four-file tree used throughout the resolution tests:
    ///
    /// ```text
    /// /foo      = "foo"
    /// /bar      = "bar"
    /// /baz/foo  = "bazfoo"
    /// /baz/bar  = "bazbar"
    /// ```
    pub fn standard() -> Self {
        Self::new()
            .with_file("/foo", "foo")
            .with_file("/bar", "bar")
            .with_file("/baz/foo", "bazfoo")
            .with_file("/baz/bar", "bazbar")
    }

    /// Directory on disk that the tree's `/` maps to.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Native location of a root-relative path.
    pub fn native(&self, path: &str) -> PathBuf {
        self.root().join(path.trim_start_matches('/'))
    }

    /// Write `content` at `path`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn with_file(self, path: &str, content: impl AsRef<[u8]>) -> Self {
        self.write(path, content);
        self
    }

    /// Create an empty directory at `path`.
    pub fn with_dir(self, path: &str) -> Self {
        let native = self.native(path);
        fs::create_dir_all(&native).unwrap_or_else(|e| {
            panic!("TestTree: failed to create {}: {e}", native.display())
        });
        self
    }

    /// Write `content` at `path` on an existing tree.
    pub fn write(&self, path: &str, content: impl AsRef<[u8]>) {
        let native = self.native(path);
        if let Some(parent) = native.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestTree: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&native, content)
            .unwrap_or_else(|e| panic!("TestTree: failed to write {}: {e}", native.display()));
    }

    /// Delete the file at `path`.
    pub fn remove(&self, path: &str) {
        let native = self.native(path);
        fs::remove_file(&native)
            .unwrap_or_else(|e| panic!("TestTree: failed to remove {}: {e}", native.display()));
    }

    /// Assert a file exists at `path`.
    pub fn assert_file_exists(&self, path: &str) {
        let native = self.native(path);
        assert!(native.is_file(), "Expected file at {}", native.display());
    }
}
