use crate::{Error, Result};
use cfgtree_fs::NormalizedPath;

/// Compute the root-relative path that `label` names when seen from `current`.
///
/// The label is applied to the parent directory of `current`, never to
/// `current` itself: `bar` from `/baz/foo` is `/baz/bar`. `.` and empty
/// segments are ignored and `..` steps up one directory, but never past the
/// root.
pub fn resolve_label(current: &NormalizedPath, label: &str) -> Result<NormalizedPath> {
    let invalid = |reason: &str| Error::InvalidLabel {
        label: label.to_string(),
        reason: reason.to_string(),
    };

    if label.trim().is_empty() {
        return Err(invalid("label is empty"));
    }
    if label.starts_with('/') || label.starts_with('\\') {
        return Err(invalid("label must be relative to the current file"));
    }
    if label.contains("://") {
        return Err(invalid("remote labels are not supported"));
    }

    let label_slashed = label.replace('\\', "/");
    let mut segments: Vec<&str> = current.components().collect();
    // Drop the file name, leaving the containing directory
    segments.pop();

    for segment in label_slashed.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(Error::LabelOutsideRoot {
                        label: label.to_string(),
                    });
                }
            }
            other => segments.push(other),
        }
    }

    Ok(NormalizedPath::new(format!("/{}", segments.join("/"))))
}
