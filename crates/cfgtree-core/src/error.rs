//! Error types for cfgtree-core

/// Result type for cfgtree-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cfgtree-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An author string did not match `name <email>`
    #[error("Author '{input}' doesn't match the expected format 'name <mail@example.com>'")]
    InvalidAuthor { input: String },

    /// A label resolved to a path with no file behind it
    #[error("Cannot find '{label}'. '{path}' does not exist.")]
    LabelNotFound { label: String, path: String },

    /// A label resolved to a directory
    #[error("Cannot find '{label}'. '{path}' is a directory.")]
    LabelIsDirectory { label: String, path: String },

    /// A label used `..` to climb above the configuration root
    #[error("Cannot resolve '{label}': it points outside the configuration root")]
    LabelOutsideRoot { label: String },

    /// A label that can never be resolved relative to a file
    #[error("Invalid label '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },

    /// A config file was constructed from something that is not a file
    #[error("Config path '{path}' is not a file")]
    NotAFile { path: String },

    /// A config file's content was read as text but is not UTF-8
    #[error("Config file '{path}' is not valid UTF-8")]
    InvalidUtf8 { path: String },

    /// Filesystem error from cfgtree-fs
    #[error(transparent)]
    Fs(#[from] cfgtree_fs::Error),
}

impl Error {
    /// Whether this error means a label could not be resolved to a file.
    pub fn is_unresolved_label(&self) -> bool {
        matches!(
            self,
            Self::LabelNotFound { .. }
                | Self::LabelIsDirectory { .. }
                | Self::LabelOutsideRoot { .. }
                | Self::InvalidLabel { .. }
        )
    }
}
