use super::{ConfigFile, resolve_label};
use crate::{Error, Result};
use cfgtree_fs::NormalizedPath;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A [`ConfigFile`] served from an in-memory map of paths to bytes.
///
/// Keys are root-relative paths (a leading `/` is optional). The map is
/// shared read-only between a file and everything resolved from it.
#[derive(Debug, Clone)]
pub struct MapConfigFile {
    files: Arc<BTreeMap<String, Vec<u8>>>,
    path: NormalizedPath,
    content: Vec<u8>,
}

impl MapConfigFile {
    /// Build a tree from `files` and open the entry at `path`.
    pub fn new<I, K, V>(files: I, path: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Vec<u8>>,
    {
        let files: BTreeMap<String, Vec<u8>> = files
            .into_iter()
            .map(|(key, value)| (rooted(key.as_ref()).to_string(), value.into()))
            .collect();
        let files = Arc::new(files);
        let target = rooted(path);

        Self::lookup(files, path, target)
    }

    fn lookup(
        files: Arc<BTreeMap<String, Vec<u8>>>,
        label: &str,
        target: NormalizedPath,
    ) -> Result<Self> {
        match files.get(target.as_str()) {
            Some(content) => {
                let content = content.clone();
                Ok(Self {
                    files,
                    path: target,
                    content,
                })
            }
            None if is_directory(&files, &target) => Err(Error::LabelIsDirectory {
                label: label.to_string(),
                path: target.to_string(),
            }),
            None => Err(Error::LabelNotFound {
                label: label.to_string(),
                path: target.to_string(),
            }),
        }
    }
}

fn rooted(path: &str) -> NormalizedPath {
    NormalizedPath::new(format!("/{}", path.trim_start_matches(['/', '\\'])))
}

fn is_directory(files: &BTreeMap<String, Vec<u8>>, target: &NormalizedPath) -> bool {
    let prefix = if target.as_str().ends_with('/') {
        target.to_string()
    } else {
        format!("{target}/")
    };
    files
        .range(prefix.clone()..)
        .next()
        .is_some_and(|(key, _)| key.starts_with(&prefix))
}

impl ConfigFile for MapConfigFile {
    fn path(&self) -> &str {
        self.path.as_str()
    }

    fn content(&self) -> Result<&[u8]> {
        Ok(&self.content)
    }

    fn resolve(&self, label: &str) -> Result<Box<dyn ConfigFile>> {
        let target = resolve_label(&self.path, label)?;
        tracing::debug!(label, from = %self.path, to = %target, "Resolving in-memory config label");

        let resolved = Self::lookup(Arc::clone(&self.files), label, target)?;
        Ok(Box::new(resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<(&'static str, &'static str)> {
        vec![
            ("/foo", "foo"),
            ("/bar", "bar"),
            ("baz/foo", "bazfoo"),
            ("baz/bar", "bazbar"),
        ]
    }

    #[test]
    fn keys_without_leading_slash_are_rooted() {
        let file = MapConfigFile::new(tree(), "baz/foo").unwrap();
        assert_eq!(file.path(), "/baz/foo");
        assert_eq!(file.content().unwrap(), b"bazfoo");
    }

    #[test]
    fn resolves_relative_to_own_directory() {
        let foo = MapConfigFile::new(tree(), "/foo").unwrap();
        let baz_foo = foo.resolve("baz/foo").unwrap();
        assert_eq!(baz_foo.resolve("bar").unwrap().content().unwrap(), b"bazbar");
        assert_eq!(foo.resolve("bar").unwrap().content().unwrap(), b"bar");
    }

    #[test]
    fn missing_entry_is_label_not_found() {
        let foo = MapConfigFile::new([("/foo", "foo")], "/foo").unwrap();
        let err = foo.resolve("bar").unwrap_err();
        assert_eq!(err.to_string(), "Cannot find 'bar'. '/bar' does not exist.");
    }

    #[test]
    fn directory_entry_is_rejected() {
        let foo = MapConfigFile::new(tree(), "/foo").unwrap();
        let err = foo.resolve("baz").unwrap_err();
        assert!(matches!(err, Error::LabelIsDirectory { path, .. } if path == "/baz"));

        let err = foo.resolve(".").unwrap_err();
        assert!(matches!(err, Error::LabelIsDirectory { path, .. } if path == "/"));
    }

    #[test]
    fn sibling_with_shared_prefix_is_not_a_directory() {
        let foo = MapConfigFile::new([("/foo", "foo"), ("/bazaar", "x")], "/foo").unwrap();
        let err = foo.resolve("baz").unwrap_err();
        assert!(matches!(err, Error::LabelNotFound { .. }));
    }

    #[test]
    fn opening_missing_entry_fails() {
        let err = MapConfigFile::new(tree(), "/nope").unwrap_err();
        assert!(err.is_unresolved_label());
    }
}
