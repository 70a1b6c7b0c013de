use super::{ConfigFile, resolve_label};
use crate::{Error, ReadOptions, Result};
use cfgtree_fs::{NormalizedPath, io};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A [`ConfigFile`] read from the local filesystem.
///
/// The tree is rooted at a directory on disk; [`ConfigFile::path`] is
/// relative to that directory. Content is read eagerly on construction and
/// on every [`resolve`](ConfigFile::resolve); nothing is re-read later.
#[derive(Debug, Clone)]
pub struct SimpleConfigFile {
    /// Directory on disk that `/` maps to
    root: NormalizedPath,
    /// Root-relative path, always starting with `/`
    path: NormalizedPath,
    content: Vec<u8>,
    options: ReadOptions,
}

impl SimpleConfigFile {
    /// Read the file at `path` inside the tree rooted at `root`.
    ///
    /// `root` is canonicalized, so it may be relative to the working
    /// directory. `path` is interpreted relative to `root` whether or not it
    /// starts with `/`.
    pub fn new(root: impl AsRef<Path>, path: &str) -> Result<Self> {
        Self::with_options(root, path, ReadOptions::default())
    }

    /// Like [`new`](Self::new), applying `options` to this file and to
    /// everything resolved from it.
    pub fn with_options(root: impl AsRef<Path>, path: &str, options: ReadOptions) -> Result<Self> {
        // Lexical cleaning would drop a leading `..`, so resolve the root on disk
        let root = io::canonicalize(root)?;
        // Cleaning an absolute path clamps any `..` at the tree root
        let path = NormalizedPath::new(format!("/{}", path.trim_start_matches(['/', '\\'])));

        let native = native_path(&root, &path);
        if native.is_dir() {
            return Err(Error::NotAFile {
                path: path.to_string(),
            });
        }
        let content = io::read_bytes(&native, options.max_file_size)?;

        Ok(Self {
            root,
            path,
            content,
            options,
        })
    }

    /// Open a file by its location on disk, using the filesystem root as the
    /// tree root.
    ///
    /// The file is canonicalized first, so on Unix `/etc/app/copy.toml` has
    /// the path `/etc/app/copy.toml`.
    pub fn open(file: impl AsRef<Path>) -> Result<Self> {
        let canonical = io::canonicalize(file)?.to_native();
        let root = canonical
            .ancestors()
            .last()
            .unwrap_or(canonical.as_path())
            .to_path_buf();
        let relative = canonical.strip_prefix(&root).unwrap_or(canonical.as_path());

        Self::new(&root, &relative.to_string_lossy())
    }

    /// Directory on disk that this tree is rooted at.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn options(&self) -> ReadOptions {
        self.options
    }
}

fn native_path(root: &NormalizedPath, path: &NormalizedPath) -> NormalizedPath {
    root.join(path.as_str().trim_start_matches('/'))
}

impl ConfigFile for SimpleConfigFile {
    fn path(&self) -> &str {
        self.path.as_str()
    }

    fn content(&self) -> Result<&[u8]> {
        Ok(&self.content)
    }

    fn resolve(&self, label: &str) -> Result<Box<dyn ConfigFile>> {
        let target = resolve_label(&self.path, label)?;
        let native = native_path(&self.root, &target);
        tracing::debug!(label, from = %self.path, to = %target, "Resolving config label");

        let metadata = match fs::metadata(native.to_native()) {
            Ok(metadata) => metadata,
            // A file standing in for a directory means the target cannot exist
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Err(Error::LabelNotFound {
                    label: label.to_string(),
                    path: target.to_string(),
                });
            }
            Err(e) => return Err(cfgtree_fs::Error::io(native.to_native(), e).into()),
        };
        if metadata.is_dir() {
            return Err(Error::LabelIsDirectory {
                label: label.to_string(),
                path: target.to_string(),
            });
        }

        let content = io::read_bytes(&native, self.options.max_file_size)?;
        Ok(Box::new(Self {
            root: self.root.clone(),
            path: target,
            content,
            options: self.options,
        }))
    }

    fn identifier(&self) -> String {
        native_path(&self.root, &self.path).to_string()
    }
}
