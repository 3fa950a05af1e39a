//! Load configuration files into a generic key-value mapping.
//!
//! The format is picked from the file's suffix (or its bare name when there is
//! no suffix) and the matching parser is invoked:
//!
//! | discriminator                 | format |
//! |-------------------------------|--------|
//! | `.json`                       | JSON   |
//! | `.toml`                       | TOML   |
//! | `.yml`, `.yaml`, bare `yaml`  | YAML   |
//!
//! ```rust,no_run
//! use viper_config::load_config;
//!
//! let config = load_config("settings.toml")?;
//! if let Some(port) = config.get("port").and_then(|p| p.as_i64()) {
//!     println!("port = {port}");
//! }
//! # Ok::<(), viper_config::ConfigError>(())
//! ```

pub mod error;
pub mod format;
pub mod loader;
pub mod value;

use std::path::Path;

pub use error::{ConfigError, Result};
pub use format::{discriminator, Format};
pub use loader::ConfigLoader;
pub use value::{Config, Value};

/// Read the config file at `path` and parse it according to its format.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    ConfigLoader::load(path.as_ref())
}
