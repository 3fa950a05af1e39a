//! Config file format detection
//!
//! Maps a path to one of the supported serialization formats by looking at
//! its suffix, or at the bare file name when there is no suffix.

use std::fmt;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Detect the format of the file at `path` without touching the filesystem.
    pub fn detect(path: &Path) -> Result<Self> {
        let discriminator = discriminator(path);
        Self::from_discriminator(&discriminator)
            .ok_or(ConfigError::UnsupportedFormat(discriminator))
    }

    /// Resolve a discriminator as produced by [`discriminator`].
    ///
    /// A bare file name of `yaml` (no suffix) is treated as YAML as well.
    pub fn from_discriminator(discriminator: &str) -> Option<Self> {
        match discriminator {
            ".json" => Some(Format::Json),
            ".toml" => Some(Format::Toml),
            ".yml" | ".yaml" | "yaml" => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string a path is classified by: its suffix including the leading dot,
/// or its full file name when it has no suffix.
///
/// Paths without a file name (`/`, `..`, the empty path) yield an empty string.
pub fn discriminator(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
        _ => path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
    }
}
