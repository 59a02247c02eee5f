//! Command-line arguments for `academy-server`.

use crate::config::{ConfigError, ServerConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "academy-server",
    version,
    about = "Course catalog and student portal backend"
)]
pub struct Args {
    /// Path to a TOML config file
    #[arg(short, long, env = "ACADEMY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "ACADEMY_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "ACADEMY_PORT")]
    pub port: Option<u16>,

    /// Directory with the built website to serve
    #[arg(long, env = "ACADEMY_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Start with an empty store
    #[arg(long, env = "ACADEMY_NO_SEED")]
    pub no_seed: bool,

    /// Default log filter (overridden by RUST_LOG)
    #[arg(long, env = "ACADEMY_LOG")]
    pub log_level: Option<String>,
}

impl Args {
    /// Load the config file and apply flag overrides on top
    pub fn resolve_config(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = ServerConfig::load(self.config.as_deref())?;

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = Some(dir.clone());
        }
        if self.no_seed {
            config.seed = false;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"127.0.0.1\"\nport = 7000").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args =
            Args::try_parse_from(["academy-server", "--config", &path, "--port", "9000", "--no-seed"])
                .unwrap();
        let config = args.resolve_config().unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(!config.seed);
    }

    #[test]
    #[serial]
    fn test_env_fills_flags() {
        std::env::set_var("ACADEMY_PORT", "6123");
        let args = Args::try_parse_from(["academy-server"]).unwrap();
        std::env::remove_var("ACADEMY_PORT");

        assert_eq!(args.port, Some(6123));
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        assert!(Args::try_parse_from(["academy-server", "--port", "99999"]).is_err());
    }
}
