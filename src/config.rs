use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::version::lists::VersionLists;

// =============================================================================
// Server-related constants
// =============================================================================

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Port the Vite dev server serves the frontend on
pub const VITE_DEV_SERVER_PORT: u16 = 5173;

/// Timeout for probing a remote version endpoint in milliseconds (10 seconds)
pub const PROBE_TIMEOUT_MS: u64 = 10_000;

/// Server configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `.framework-mode`, `frameworks/` and `dist/`
    pub project_root: PathBuf,
    /// Runtime identifier reported in the `node` field
    pub runtime: String,
    /// Also write logs to this file when set
    pub log_file: Option<PathBuf>,
    pub versions: VersionLists,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            project_root: PathBuf::from("."),
            runtime: default_runtime(),
            log_file: None,
            versions: VersionLists::default(),
        }
    }
}

impl ServerConfig {
    /// Load the config file
    ///
    /// An explicitly given path must exist. Without one, the default path is
    /// used if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply the `PORT` environment variable; unparsable values are ignored
    pub fn with_port_env(mut self, port_env: Option<String>) -> Self {
        if let Some(port) = port_env.and_then(|p| p.trim().parse().ok()) {
            self.port = port;
        }
        self
    }
}

/// Runtime identifier of this server build
pub fn default_runtime() -> String {
    format!("rust-{}", env!("CARGO_PKG_VERSION"))
}

/// Returns the path to the config directory for react-version-probe.
/// Uses $XDG_CONFIG_HOME/react-version-probe if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/react-version-probe,
/// or ./react-version-probe if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("react-version-probe")
}
