use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use crate::alias::DEFAULT_GROUP;
use crate::error::{ConfigError, Result};
use crate::paths;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Settings for the store the CLI operates on.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the store files. Defaults to `~/.shorthand`.
    pub dir: Option<PathBuf>,
    /// Store name the CLI reads and writes.
    pub file: String,
    /// Group used when a command does not name one.
    pub group: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    ///
    /// The config file is optional for the CLI; only an explicitly passed
    /// path is required to exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.store.file.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.file",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if self.store.file.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "store.file",
                reason: "must not contain path separators".into(),
            }
            .into());
        }
        if self.store.group.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.group",
                reason: "must not be empty".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Directory the store files live in, after applying the config override.
    pub fn store_dir(&self) -> PathBuf {
        self.store.dir.clone().unwrap_or_else(paths::home_dir)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file: "aliases".into(),
            group: DEFAULT_GROUP.into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Diagnostics go to stderr; stdout is reserved for command output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}
