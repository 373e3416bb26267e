//! Server configuration file support.
//!
//! Configuration is read from a TOML file (`asb.toml`); every field has a
//! default so a missing file or an empty one is still a valid configuration.
//! The binaries additionally honor `HOST`, `PORT`, and `ASB_CATALOGUE`
//! environment overrides on top of whatever the file provides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::solver::DEFAULT_MAX_SOLUTIONS;

/// Errors from reading or parsing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub catalogue: CatalogueSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub limits: LimitSettings,
}

/// Catalogue data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueSettings {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

/// Bind address settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Solution-cap limits for the solve endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LimitSettings {
    /// Cap applied when the request does not supply one.
    #[serde(default = "default_max_solutions")]
    pub default_max_solutions: usize,
    /// Hard ceiling; caller-supplied caps are clamped to this.
    #[serde(default = "default_max_solutions_ceiling")]
    pub max_solutions_ceiling: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("all_sections.json")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_solutions() -> usize {
    DEFAULT_MAX_SOLUTIONS
}

fn default_max_solutions_ceiling() -> usize {
    500
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            default_max_solutions: default_max_solutions(),
            max_solutions_ceiling: default_max_solutions_ceiling(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the first `asb.toml` found in the standard locations, or
    /// fall back to the built-in defaults when none exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("asb.toml"),
            PathBuf::from("backend/asb.toml"),
            PathBuf::from("../asb.toml"),
        ];
        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }
}
