//! Configuration management.
//!
//! Settings are layered, lowest priority first: built-in defaults, a TOML
//! file, then `WORDFINDER_<SECTION>__<KEY>` environment variables
//! (e.g. `WORDFINDER_WEB__TIMEOUT_SECONDS=5`).

mod file_config;

pub use file_config::ConfigFileError;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "wordfinder.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WORDFINDER";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Folder scan settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Web page fetch settings
    #[serde(default)]
    pub web: WebConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Folder scan configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Extension of the documents scanned in a folder
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "docx".to_string()
}

/// Web page fetch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Overall request timeout
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Drop the text of script, style, noscript and template elements
    #[serde(default = "default_true")]
    pub skip_hidden_elements: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            skip_hidden_elements: true,
        }
    }
}

impl WebConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    crate::utils::default_user_agent().to_string()
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when neither `-v`/`-q` nor `RUST_LOG` is given
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load configuration from defaults, an optional TOML file and the environment
pub fn load_config(path: Option<&Path>) -> Result<Settings, config::ConfigError> {
    let mut builder =
        config::Config::builder().add_source(config::Config::try_from(&Settings::default())?);

    if let Some(path) = path {
        builder = builder.add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
        );
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Find a config file: `./wordfinder.toml`, then the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    default_config_path().filter(|p| p.is_file())
}

/// `<config_dir>/wordfinder/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordfinder").join("config.toml"))
}
