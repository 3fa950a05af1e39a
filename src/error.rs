use thiserror::Error;

use crate::format::Format;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file extension {0} not supported")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{format} document root must be a mapping, found {found}")]
    RootNotMapping { format: Format, found: &'static str },
}

impl ConfigError {
    /// True when the file was read but its content is not a valid config
    /// for the detected format.
    pub fn is_parse_error(&self) -> bool {
        self.format().is_some()
    }

    /// Format whose parser rejected the content, if this is a parse error.
    pub fn format(&self) -> Option<Format> {
        match self {
            ConfigError::Json(_) => Some(Format::Json),
            ConfigError::Toml(_) => Some(Format::Toml),
            ConfigError::Yaml(_) => Some(Format::Yaml),
            ConfigError::RootNotMapping { format, .. } => Some(*format),
            ConfigError::UnsupportedFormat(_) | ConfigError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
