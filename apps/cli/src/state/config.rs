//! # Configuration State
//!
//! Stores shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPLIST_*`)
//! 2. Config file (`shoplist.toml`)
//! 3. Defaults (this file)
//!
//! The config file is looked up at `SHOPLIST_CONFIG` if set, otherwise in the
//! platform config directory:
//! - Linux: `~/.config/shoplist/shoplist.toml`
//! - macOS: `~/Library/Application Support/com.shoplist.shoplist/shoplist.toml`
//!
//! ## Configuration File Format
//! ```toml
//! id_policy = "monotonic"  # length | monotonic
//! output = "text"          # text | json
//! prompt = "> "
//! ```
//!
//! Configuration is read-only after initialization.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shoplist_core::IdPolicy;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has a value outside its allowed set.
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

// =============================================================================
// Output Format
// =============================================================================

/// How the shell prints each re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable list and form.
    #[default]
    Text,

    /// One JSON `ListResponse` per line.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Config State
// =============================================================================

fn default_prompt() -> String {
    "> ".to_string()
}

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    /// Id assignment for new items.
    /// Default: length + 1, which can repeat ids after a deletion.
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// Render format.
    #[serde(default)]
    pub output: OutputFormat,

    /// Prompt printed before each input line in text mode.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            id_policy: IdPolicy::default(),
            output: OutputFormat::default(),
            prompt: default_prompt(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (shoplist.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var("SHOPLIST_CONFIG").ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_overrides(|key| std::env::var(key).ok());
            config
        })
    }

    /// Parses a `shoplist.toml` document. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `SHOPLIST_ID_POLICY` and `SHOPLIST_OUTPUT` as returned by `lookup`.
    ///
    /// Unrecognized values are logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(policy) = lookup("SHOPLIST_ID_POLICY") {
            match policy.parse::<IdPolicy>() {
                Ok(parsed) => {
                    debug!(id_policy = %parsed, "Overriding id policy from environment");
                    self.id_policy = parsed;
                }
                Err(e) => warn!("{}", e),
            }
        }

        if let Some(output) = lookup("SHOPLIST_OUTPUT") {
            match output.parse::<OutputFormat>() {
                Ok(parsed) => {
                    debug!(output = %parsed, "Overriding output format from environment");
                    self.output = parsed;
                }
                Err(e) => warn!("{}", e),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shoplist", "shoplist")
            .map(|dirs| dirs.config_dir().join("shoplist.toml"))
    }
}
