//! Server configuration.
//!
//! Read from an optional TOML file, then overridden by `HEIRLOOM_*`
//! environment variables (`HEIRLOOM_DATABASE_URL`, `HEIRLOOM_PORT`, …).

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                 String,
  #[serde(default = "default_port")]
  pub port:                 u16,
  /// A filesystem path, optionally prefixed with `sqlite://`, or `:memory:`.
  pub database_url:         String,
  #[serde(default = "default_request_timeout_secs")]
  pub request_timeout_secs: u64,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 3000 }

fn default_request_timeout_secs() -> u64 { 30 }

impl ServerConfig {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("HEIRLOOM"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The database file to open, with any `sqlite://` scheme removed and a
  /// leading `~` expanded.
  pub fn database_path(&self) -> PathBuf {
    let raw = self
      .database_url
      .strip_prefix("sqlite://")
      .unwrap_or(&self.database_url);
    expand_tilde(Path::new(raw))
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
