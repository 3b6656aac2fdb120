//! Configuration loading and typed config structures.
//!
//! The configuration lives in `colitas-config.yaml` in the working
//! directory. Every field has a default, so the file is optional; a few
//! values can also be overridden from the environment for container
//! deployments.

use std::path::{Path, PathBuf};

use colitas_web::ServerConfig;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override holds an unusable value.
    #[error("invalid {name}: {message}")]
    InvalidEnv {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `colitas-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Data file locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Page template overrides.
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `path`, or use defaults if it does not exist.
    ///
    /// Environment overrides are applied in both cases:
    /// - `COLITAS_HOST` overrides `server.host`
    /// - `COLITAS_PORT` overrides `server.port`
    /// - `COLITAS_SHELTERS_PATH` overrides `data.shelters_path`
    /// - `COLITAS_VETERINARIAS_PATH` overrides `data.veterinarias_path`
    /// - `COLITAS_TEMPLATES_DIR` overrides `templates.dir`
    /// - `COLITAS_LOG_LEVEL` overrides `logging.level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::InvalidEnv`] if an override cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::parse(&std::fs::read_to_string(path)?)?
        } else {
            Self::default()
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Parse configuration from a YAML string, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from a variable lookup (normally the process
    /// environment).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `COLITAS_PORT` is not a port
    /// number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("COLITAS_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("COLITAS_PORT") {
            self.server.port = val.parse().map_err(|e| ConfigError::InvalidEnv {
                name: "COLITAS_PORT",
                message: format!("{val:?}: {e}"),
            })?;
        }
        if let Some(val) = lookup("COLITAS_SHELTERS_PATH") {
            self.data.shelters_path = PathBuf::from(val);
        }
        if let Some(val) = lookup("COLITAS_VETERINARIAS_PATH") {
            self.data.veterinarias_path = PathBuf::from(val);
        }
        if let Some(val) = lookup("COLITAS_TEMPLATES_DIR") {
            self.templates.dir = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("COLITAS_LOG_LEVEL") {
            self.logging.level = val;
        }
        Ok(())
    }
}

/// Locations of the data files loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataConfig {
    /// JSON array of shelters with embedded animals.
    #[serde(default = "default_shelters_path")]
    pub shelters_path: PathBuf,

    /// JSON array of veterinary clinics.
    #[serde(default = "default_veterinarias_path")]
    pub veterinarias_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            shelters_path: default_shelters_path(),
            veterinarias_path: default_veterinarias_path(),
        }
    }
}

/// Page template configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplatesConfig {
    /// Directory of template overrides. The built-in templates are used
    /// when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG`
    /// takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_shelters_path() -> PathBuf {
    PathBuf::from("data/albergues.json")
}

fn default_veterinarias_path() -> PathBuf {
    PathBuf::from("data/veterinarias.json")
}

fn default_log_level() -> String {
    "info".to_owned()
}
