//! Server configuration.
//!
//! Resolution order, later wins: built-in defaults, TOML file, CLI flags
//! (which clap also fills from `ACADEMY_*` environment variables).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file consulted when no path is given, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "~/.academy/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Insert the demo data at startup
    pub seed: bool,
    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,
    /// Directory with the built website; served for non-API paths
    pub static_dir: Option<PathBuf>,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed: true,
            cors_permissive: true,
            static_dir: None,
            log_level: "info".to_string(),
        }
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

impl ServerConfig {
    /// Parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_home(path);
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Load from `path` when given, else from the default location when that
    /// file exists, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = expand_home(Path::new(DEFAULT_CONFIG_PATH));
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert!(config.seed);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 8080\nseed = false").unwrap();

        let config = ServerConfig::load_from(file.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.seed);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_static_dir_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "static_dir = \"dist/public\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.static_dir, Some(PathBuf::from("dist/public")));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = ServerConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_expand_home() {
        let plain = expand_home(Path::new("/etc/academy.toml"));
        assert_eq!(plain, PathBuf::from("/etc/academy.toml"));

        let expanded = expand_home(Path::new("~/.academy/config.toml"));
        assert!(expanded.ends_with(".academy/config.toml"));
    }
}
