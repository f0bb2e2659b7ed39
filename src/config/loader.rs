use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/giftmart/config.toml` on Unix/macOS, or the
    /// equivalent on other platforms via `dirs::config_dir()`. Falls back
    /// to the current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("giftmart").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the user
    /// asked for this file specifically.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Base URLs are non-empty and http(s)
    /// - Timeouts and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("api.base_url", &self.api.base_url),
            ("api.user_base_url", &self.api.user_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be an http(s) URL, got '{}'", name, url),
                });
            }
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).expect("create config file");
        file.write_all(content.as_bytes()).expect("write config");
        (dir, path)
    }

    #[test]
    fn defaults_validate() {
        Config::default().validate().expect("defaults must be valid");
    }

    #[test]
    fn load_from_parses_overrides() {
        let (_dir, path) = write_config(
            r#"
            [api]
            base_url = "https://market.example.com/api"
            timeout_seconds = 5

            [ui]
            tick_rate_ms = 100
            "#,
        );
        let config = Config::load_from(&path).expect("load config");
        assert_eq!(config.api.base_url, "https://market.example.com/api");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.ui.tick_rate_ms, 100);
        // Untouched sections keep their defaults
        assert_eq!(config.ui.demo_user_id, 1);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let missing = dir.path().join("nope.toml");
        let err = Config::load_from(&missing).expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let (_dir, path) = write_config(
            r#"
            [api]
            base_url = "ftp://market.example.com"
            "#,
        );
        let err = Config::load_from(&path).expect_err("ftp url must fail");
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn rejects_zero_timeout() {
        let (_dir, path) = write_config(
            r#"
            [api]
            timeout_seconds = 0
            "#,
        );
        let err = Config::load_from(&path).expect_err("zero timeout must fail");
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let (_dir, path) = write_config("[api\nbase_url = ");
        let err = Config::load_from(&path).expect_err("malformed toml must fail");
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
