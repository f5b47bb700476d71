//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clipsweep_client::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT};
use clipsweep_janitor::JanitorConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration file contents.
///
/// ```toml
/// [service]
/// host = "localhost"
/// port = 41184
/// token = "..."
///
/// [settings]
/// color = true
///
/// [janitor]
/// page_size = 100
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Web Clipper service connection
    #[serde(default)]
    pub service: ServiceSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Sweep tuning
    #[serde(default)]
    pub janitor: JanitorConfig,
}

/// Connection settings stored in the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceSettings {
    /// Service host
    pub host: Option<String>,

    /// Service port; range-checked when resolved
    pub port: Option<i64>,

    /// Access token
    pub token: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// HTTP client settings
    pub client: ClientConfig,

    /// Sweep settings
    pub janitor: JanitorConfig,

    /// Whether output may be colored
    pub color: bool,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".clipsweep").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicitly given file must exist; the default file is optional and
    /// its absence yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::path() {
                Ok(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge command-line flags over the file values and validate.
    ///
    /// Precedence: flag or environment variable, then config file, then default.
    pub fn resolve(self, cli: &Cli) -> Result<RunSettings> {
        let port = match (cli.port, self.service.port) {
            (Some(port), _) => port,
            (None, Some(port)) => u16::try_from(port)
                .map_err(|_| CliError::Config(format!("port {} is invalid (expected 0-65535)", port)))?,
            (None, None) => DEFAULT_PORT,
        };

        let token = cli
            .token
            .clone()
            .or(self.service.token)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                CliError::Config("token is empty (pass -t <token> or set CLIPSWEEP_TOKEN)".into())
            })?;

        let host = cli
            .host
            .clone()
            .or(self.service.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        self.janitor.validate()?;

        Ok(RunSettings {
            client: ClientConfig::new(&host, port, token),
            janitor: self.janitor,
            color: self.settings.color && !cli.no_color,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}
