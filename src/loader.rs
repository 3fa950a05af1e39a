//! Config file loader
//!
//! Reads a JSON, TOML or YAML file and returns its content as a [`Config`]
//! mapping. The format is chosen from the path before the file is opened.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::format::Format;
use crate::value::{self, Config, Value};

/// Loader for configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file at `path`.
    ///
    /// An unsupported suffix is reported before the file is opened, so a
    /// missing `settings.xyz` fails with [`ConfigError::UnsupportedFormat`]
    /// rather than an IO error.
    pub fn load(path: &Path) -> Result<Config> {
        let format = Format::detect(path)?;
        tracing::debug!("Detected {} config at {}", format, path.display());

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;

        tracing::debug!(
            "Loaded {} top-level keys from {}",
            config.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse config text that is already in memory.
    pub fn parse(content: &str, format: Format) -> Result<Config> {
        match format {
            Format::Json => Self::parse_json(content),
            Format::Toml => Self::parse_toml(content),
            Format::Yaml => Self::parse_yaml(content),
        }
    }

    fn parse_json(content: &str) -> Result<Config> {
        let value: Value = serde_json::from_str(content)?;
        Self::expect_mapping(value, Format::Json)
    }

    fn parse_toml(content: &str) -> Result<Config> {
        // A TOML document is always a table at the root
        let table: toml::Table = toml::from_str(content)?;
        Ok(value::from_toml_table(table))
    }

    fn parse_yaml(content: &str) -> Result<Config> {
        let mut yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
        // Resolve `<<: *anchor` merge keys before leaving the YAML tree
        yaml.apply_merge()?;
        let value: Value = serde_yaml::from_value(yaml)?;
        Self::expect_mapping(value, Format::Yaml)
    }

    fn expect_mapping(value: Value, format: Format) -> Result<Config> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::RootNotMapping {
                format,
                found: value::type_name(&other),
            }),
        }
    }
}
