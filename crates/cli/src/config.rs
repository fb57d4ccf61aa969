//! Settings resolution for the `atomic-executor` binary.
//!
//! Precedence, lowest to highest: built-in defaults, the TOML file named by
//! `--config`, `ATOMIC_EXECUTOR_*` environment variables, command-line flags.
//!
//! ```toml
//! [executor]
//! service_name = "my-executor"
//! service_version = "1.0.0"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! ```

use std::path::{Path, PathBuf};

use atomic_executor_core::ExecutorConfig;
use serde::Deserialize;

pub(crate) const ENV_SERVICE_NAME: &str = "ATOMIC_EXECUTOR_SERVICE_NAME";
pub(crate) const ENV_SERVICE_VERSION: &str = "ATOMIC_EXECUTOR_SERVICE_VERSION";
pub(crate) const ENV_HOST: &str = "ATOMIC_EXECUTOR_HOST";
pub(crate) const ENV_PORT: &str = "ATOMIC_EXECUTOR_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("error reading config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid {var}: '{value}' is not a valid port")]
    InvalidPort { var: &'static str, value: String },
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) executor: ExecutorConfig,
    pub(crate) server: ServerConfig,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub(crate) config_file: Option<PathBuf>,
    pub(crate) service_name: Option<String>,
    pub(crate) service_version: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
}

impl Settings {
    pub(crate) fn from_toml_str(source: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source, path)
    }
}

/// Resolve settings from the process environment.
pub(crate) fn resolve(overrides: &Overrides) -> Result<Settings, ConfigError> {
    resolve_with(overrides, |var| std::env::var(var).ok())
}

/// Resolve settings with an explicit environment lookup. Empty values count
/// as unset.
pub(crate) fn resolve_with<F>(overrides: &Overrides, env: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match &overrides.config_file {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    let env = |var: &str| env(var).filter(|v| !v.is_empty());

    if let Some(name) = env(ENV_SERVICE_NAME) {
        settings.executor.service_name = name;
    }
    if let Some(version) = env(ENV_SERVICE_VERSION) {
        settings.executor.service_version = version;
    }
    if let Some(host) = env(ENV_HOST) {
        settings.server.host = host;
    }
    if let Some(port) = env(ENV_PORT) {
        settings.server.port = port.parse().map_err(|_| ConfigError::InvalidPort {
            var: ENV_PORT,
            value: port.clone(),
        })?;
    }

    if let Some(name) = &overrides.service_name {
        settings.executor.service_name = name.clone();
    }
    if let Some(version) = &overrides.service_version {
        settings.executor.service_version = version.clone();
    }
    if let Some(host) = &overrides.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = overrides.port {
        settings.server.port = port;
    }

    Ok(settings)
}
