//! Configuration management for goaltrack.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loaders::SlugMode;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "goaltrack";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "GOALTRACK_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GOALTRACK_`, nested keys split on `__`)
/// 2. TOML config file at `~/.config/goaltrack/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Route configuration.
    pub routes: RoutesConfig,
    /// Goal data configuration.
    pub data: DataConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_addr: String,
}

/// Route-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// How `/goal/:slug` interprets its slug.
    pub slug_mode: SlugMode,
}

/// Goal data configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON seed file replacing the built-in goals.
    pub goals_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// The default path may be absent, in which case defaults apply. An
    /// explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or if configuration
    /// loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_file(&path),
            None => Self::from_figment(Self::figment(&Self::default_config_path())),
        }
    }

    /// Load configuration from a file that must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, or if configuration loading
    /// or parsing fails.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigValidation {
                message: format!("configuration file not found: {}", path.display()),
            });
        }
        Self::from_figment(Self::figment(path))
    }

    fn figment(config_file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr().map(|_| ())
    }

    /// Apply `serve` command-line overrides, then re-validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the overridden bind address is invalid.
    pub fn apply_serve_overrides(
        &mut self,
        bind_addr: Option<String>,
        slug_mode: Option<SlugMode>,
    ) -> Result<()> {
        if let Some(bind_addr) = bind_addr {
            self.server.bind_addr = bind_addr;
        }
        if let Some(slug_mode) = slug_mode {
            self.routes.slug_mode = slug_mode;
        }
        self.validate()
    }

    /// The slug mode to use: `requested` if given, else `routes.slug_mode`.
    #[must_use]
    pub fn slug_mode_or(&self, requested: Option<SlugMode>) -> SlugMode {
        requested.unwrap_or(self.routes.slug_mode)
    }

    /// The parsed server bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind_addr` isn't a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .map_err(|_| Error::ConfigValidation {
                message: format!(
                    "server.bind_addr is not a socket address: {}",
                    self.server.bind_addr
                ),
            })
    }
}
