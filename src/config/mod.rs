//! Configuration module for the M269 ADTs library.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML,
//! JSON), then environment variables. The merged result is validated before
//! use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod collections;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "M269";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the M269 ADTs library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdtConfig {
    /// Container sizing
    pub collections: collections::CollectionsConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for AdtConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.collections.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Output formats for [`AdtConfig::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document
    Toml,
    /// Pretty-printed JSON document
    Json,
}

impl AdtConfig {
    /// Renders the configuration as a document that [`ConfigLoader`] can read
    /// back.
    pub fn render(&self, format: ConfigFormat) -> ConfigResult<String> {
        match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Serialization(e.to_string())),
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Serialization(e.to_string())),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the M269 ADTs library.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment
    /// variables, in increasing order of precedence.
    ///
    /// Environment variables take the form `PREFIX__SECTION__KEY`, for
    /// example `M269__COLLECTIONS__STACK_CAPACITY=64`.
    ///
    /// # Returns
    ///
    /// * `Ok(AdtConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<AdtConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&AdtConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            tracing::trace!(path = ?path, ?format, "adding configuration file");
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { cause, .. } => {
                ConfigError::ParseError(format!("Error parsing config file: {cause}"))
            }
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let adt_config: AdtConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        adt_config.validate()?;

        Ok(adt_config)
    }

    /// Loads defaults plus environment overrides, ignoring the file.
    pub fn load_defaults(&self) -> ConfigResult<AdtConfig> {
        ConfigLoader::new(None::<&Path>, &self.env_prefix).load()
    }

    /// Loads the configuration, falling back to defaults (plus environment
    /// overrides) when the configuration file does not exist.
    ///
    /// The second element is the missing file's path when the fallback was
    /// taken, so callers that install logging afterwards can still report it.
    pub fn load_or_default(&self) -> ConfigResult<(AdtConfig, Option<PathBuf>)> {
        match self.load() {
            Err(ConfigError::FileNotFound(path)) => {
                tracing::warn!("Configuration file not found at: {}", path.display());
                Ok((self.load_defaults()?, Some(path)))
            }
            result => result.map(|config| (config, None)),
        }
    }
}
