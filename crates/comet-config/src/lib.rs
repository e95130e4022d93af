//! Configuration loading for the comet workspace.
//!
//! Reads an optional `config.toml` from the platform config directory.
//! A missing file yields the defaults; an unreadable or invalid file is an
//! error so typos do not silently disappear. SMTP credentials are not part
//! of this file, they come from the environment (see `comet-relay`).

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration, all sections optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trail: TrailSection,
    pub relay: RelaySection,
    pub smtp: SmtpSection,
}

/// Trail display settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailSection {
    /// Trail color theme name.
    pub theme: String,
}

impl Default for TrailSection {
    fn default() -> Self {
        Self {
            theme: "purple".to_string(),
        }
    }
}

/// Relay endpoint settings, used by both the server and the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelaySection {
    /// Socket address the relay binds to.
    pub listen: String,
    /// Endpoint URL the client submits to.
    pub url: String,
    /// Explicit recipient for client submissions. The relay falls back to
    /// its configured account when unset.
    pub to: Option<String>,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:3000".to_string(),
            url: "http://127.0.0.1:3000/api/send".to_string(),
            to: None,
        }
    }
}

/// Mail submission endpoint. Credentials are environment-only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmtpSection {
    /// Submission host.
    pub host: String,
    /// Submission port (implicit TLS).
    pub port: u16,
}

impl Default for SmtpSection {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 465,
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Location of the config file, if a config directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "comet").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
