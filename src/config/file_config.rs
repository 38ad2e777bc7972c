//! Configuration file support for wordfinder.
//!
//! # Configuration File Format
//!
//! ```toml
//! [search]
//! extension = "docx"
//!
//! [web]
//! timeout_seconds = 10
//! user_agent = "wordfinder/0.3.2"
//! skip_hidden_elements = true
//!
//! [logging]
//! level = "warn"
//! format = "text"
//! ```

use std::path::{Path, PathBuf};

use super::Settings;

impl Settings {
    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigFileError> {
        toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))
    }

    /// Parse a configuration from TOML text, filling in missing keys with defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    pub fn save(&self, path: &Path, overwrite: bool) -> Result<(), ConfigFileError> {
        if path.exists() && !overwrite {
            return Err(ConfigFileError::AlreadyExists(path.to_path_buf()));
        }

        let content = self.to_toml()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::Io(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Config file already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::tempdir;

    #[test]
    fn test_config_file_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Settings::default();
        config.search.extension = "docm".to_string();
        config.web.timeout_seconds = 4;

        config.save(&path, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.search.extension, "docm");
        assert_eq!(loaded.web.timeout_seconds, 4);
    }

    #[test]
    fn test_config_file_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nextension = \"docx\"\n").unwrap();

        let result = Settings::default().save(&path, false);
        assert!(matches!(result, Err(ConfigFileError::AlreadyExists(_))));

        assert!(Settings::default().save(&path, true).is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Settings::from_toml("[web]\ntimeout_seconds = 2\n").unwrap();
        assert_eq!(config.web.timeout_seconds, 2);
        assert_eq!(config.search.extension, "docx");
        assert!(config.web.skip_hidden_elements);
    }

    #[test]
    fn test_config_file_invalid_toml() {
        let result = Settings::from_toml("invalid = toml = content");
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_to_toml_round_trip() {
        let config = Settings::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[search]"));
        assert_eq!(Settings::from_toml(&rendered).unwrap(), config);
    }
}
