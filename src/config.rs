//! Server configuration.
//!
//! Configuration is read from an optional YAML file whose path is given by the
//! `FILESERVE_CONFIG` environment variable. Every field has a default, so an
//! empty file (or no file at all) serves the current directory on port 4000.
//!
//! ```yaml
//! server:
//!   listen_addr: "127.0.0.1:4000"
//!   read_buffer_size: 8192
//! static_files:
//!   root: "./public"
//!   confine_to_root: true
//! log_level: debug
//! ```
//!
//! The `LISTEN` environment variable overrides `server.listen_addr`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

pub const CONFIG_ENV: &str = "FILESERVE_CONFIG";
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Upper bound on the bytes taken from the socket in one read. Each read
    /// is handled as one complete request.
    pub read_buffer_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory prepended verbatim to the request target.
    pub root: PathBuf,
    /// Answer targets containing `..` segments with the not-found page.
    pub confine_to_root: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4000".to_string(),
            read_buffer_size: 8192,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            confine_to_root: false,
        }
    }
}

impl Config {
    /// Loads the configuration file named by `FILESERVE_CONFIG` (if any) and
    /// applies the `LISTEN` override.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml_str(&raw)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        let cfg: Config = if raw.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(raw)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.server.read_buffer_size == 0 {
            anyhow::bail!("server.read_buffer_size must be greater than zero");
        }
        Level::from_str(&self.log_level)
            .map_err(|_| anyhow::anyhow!("unknown log_level {:?}", self.log_level))?;
        Ok(())
    }

    pub fn max_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}
