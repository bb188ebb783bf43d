//! Runtime configuration.
//!
//! Settings come from an optional YAML file (path in `BEACON_CONFIG`) and
//! are then overridden by the `LISTEN` and `ROOT` environment variables.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::Level;

/// Legacy header name emitted on successful GET responses.
pub const LEGACY_CONTENT_TYPE_HEADER: &str = "ContentType";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub listen_addr: String,
    /// Upper bound on connections served at once, `None` for unbounded
    pub max_connections: Option<usize>,
    /// Header name carrying the MIME type of a served resource
    pub content_type_header: String,
    /// Maximum tracing level for the binary's subscriber
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory whose files are served
    pub root: PathBuf,
    /// Extension to MIME entries merged over the built-in table
    pub mime_types: HashMap<String, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8585".to_string(),
            max_connections: None,
            content_type_header: LEGACY_CONTENT_TYPE_HEADER.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parses `log_level` (`error`, `warn`, `info`, `debug`, `trace`, any case).
    pub fn log_level(&self) -> anyhow::Result<Level> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid server.log_level {:?}", self.log_level))
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./public"),
            mime_types: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads the file named by `BEACON_CONFIG` (if any) and applies
    /// environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("BEACON_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                Self::from_yaml(&text)
                    .with_context(|| format!("invalid config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to `null`, which serde rejects for a struct.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}
