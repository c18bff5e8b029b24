//! Runtime configuration: an optional TOML file overlaid with `TODO_*`
//! environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Path value that selects a non-persistent store.
pub const IN_MEMORY: &str = ":memory:";

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  /// Load settings from `path` (if it exists) and the environment.
  ///
  /// Every key has a default, so an empty environment and no file still
  /// yields a usable config.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 3000)?
      .set_default("store_path", "todo.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TODO").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn is_in_memory(&self) -> bool { self.store_path.as_os_str() == IN_MEMORY }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
