use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::http::buffer::DEFAULT_CAPACITY;
use crate::http::sanitize::SanitizePolicy;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_ENV: &str = "DOCROOT_CONFIG";

/// Environment variable overriding the listen address.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub listen_addr: String,
    /// Directory request targets are resolved against.
    pub document_root: PathBuf,
    /// Size of the scratch buffer, which bounds both requests and responses.
    pub buffer_capacity: usize,
    pub sanitize: SanitizePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:7000".to_string(),
            document_root: PathBuf::from("."),
            buffer_capacity: DEFAULT_CAPACITY,
            sanitize: SanitizePolicy::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from the environment.
    ///
    /// Starts from the file named by `DOCROOT_CONFIG`, or the defaults when it
    /// is unset, and then applies `LISTEN`.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.listen_addr = listen_addr;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.buffer_capacity == 0 {
            anyhow::bail!("buffer_capacity must be greater than zero");
        }
        Ok(())
    }
}
