//! Document format detection and decoding

use crate::{Error, NormalizedPath, Result};
use serde::de::DeserializeOwned;

/// A structured document format recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Detect the format of `path` from its extension.
    ///
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn detect(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Decode `content` into `T`, choosing the format from `path`'s extension.
///
/// `path` is only used for format detection and error context; nothing is
/// read from disk.
pub fn decode<T: DeserializeOwned>(content: &str, path: &NormalizedPath) -> Result<T> {
    let format = Format::detect(path)?;
    let parse_error = |message: String| Error::ConfigParse {
        path: path.to_native(),
        format: format.name().into(),
        message,
    };

    match format {
        Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_is_case_insensitive() {
        let path = NormalizedPath::new("/workflows/copy.TOML");
        assert_eq!(Format::detect(&path).unwrap(), Format::Toml);
    }

    #[test]
    fn detect_rejects_missing_extension() {
        let path = NormalizedPath::new("/workflows/copy");
        assert!(matches!(
            Format::detect(&path),
            Err(Error::UnsupportedFormat { extension }) if extension.is_empty()
        ));
    }
}
