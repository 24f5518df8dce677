//! Configuration management for forecare.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::session;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "forecare";

/// Upper bound for the assistant typing delay.
const MAX_TYPING_DELAY_MS: u64 = 10_000;

/// Time window the trend views default to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    /// The past seven days.
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    /// The past thirty days.
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SevenDays => write!(f, "Last 7 days"),
            Self::ThirtyDays => write!(f, "Last 30 days"),
        }
    }
}

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FORECARE_`)
/// 2. TOML config file at `~/.config/forecare/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session configuration.
    pub session: SessionConfig,
    /// Assistant configuration.
    pub assistant: AssistantConfig,
    /// Dashboard presentation configuration.
    pub dashboard: DashboardConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path to the session store file.
    /// Defaults to `<runtime dir>/forecare/session.json`.
    pub store_path: Option<PathBuf>,
}

/// Assistant-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Simulated typing delay before a canned reply, in milliseconds.
    pub typing_delay_ms: u64,
}

/// Dashboard presentation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Default time window for trend views.
    pub time_range: TimeRange,
    /// Whether trend views compare against the personal baseline.
    pub show_baseline: bool,
    /// Unit the resident list is pre-filtered to, if any.
    pub default_unit: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 800,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            time_range: TimeRange::SevenDays,
            show_baseline: true,
            default_unit: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `FORECARE_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("FORECARE_").split("_"));

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
        if self.assistant.typing_delay_ms > MAX_TYPING_DELAY_MS {
            return Err(Error::ConfigValidation {
                message: format!(
                    "typing_delay_ms ({}) cannot exceed {MAX_TYPING_DELAY_MS}",
                    self.assistant.typing_delay_ms
                ),
            });
        }

        if let Some(unit) = &self.dashboard.default_unit {
            if unit.trim().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "default_unit cannot be blank".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the session store path, resolving defaults if not set.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.session
            .store_path
            .clone()
            .unwrap_or_else(session::default_session_path)
    }

    /// Get the assistant typing delay as a Duration.
    #[must_use]
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.assistant.typing_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.session.store_path.is_none());
        assert_eq!(config.assistant.typing_delay_ms, 800);
        assert_eq!(config.dashboard.time_range, TimeRange::SevenDays);
        assert!(config.dashboard.show_baseline);
        assert!(config.dashboard.default_unit.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_excessive_typing_delay() {
        let mut config = Config::default();
        config.assistant.typing_delay_ms = 60_000;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("typing_delay_ms"));
    }

    #[test]
    fn test_validate_blank_default_unit() {
        let mut config = Config::default();
        config.dashboard.default_unit = Some("   ".to_string());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("default_unit"));
    }

    #[test]
    fn test_session_path_default() {
        let config = Config::default();
        let path = config.session_path();
        assert!(path.to_string_lossy().contains("session.json"));
    }

    #[test]
    fn test_session_path_custom() {
        let mut config = Config::default();
        config.session.store_path = Some(PathBuf::from("/custom/path/session.json"));
        assert_eq!(
            config.session_path(),
            PathBuf::from("/custom/path/session.json")
        );
    }

    #[test]
    fn test_typing_delay_duration() {
        let config = Config::default();
        assert_eq!(config.typing_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_time_range_serde_names() {
        assert_eq!(
            serde_json::to_string(&TimeRange::SevenDays).unwrap(),
            "\"7d\""
        );
        let range: TimeRange = serde_json::from_str("\"30d\"").unwrap();
        assert_eq!(range, TimeRange::ThirtyDays);
    }

    #[test]
    fn test_time_range_display() {
        assert_eq!(TimeRange::SevenDays.to_string(), "Last 7 days");
        assert_eq!(TimeRange::ThirtyDays.to_string(), "Last 30 days");
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("forecare"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("typing_delay_ms"));
        assert!(json.contains("show_baseline"));
    }

    #[test]
    fn test_dashboard_config_deserialize() {
        let json = r#"{"time_range": "30d", "show_baseline": false}"#;
        let dashboard: DashboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.time_range, TimeRange::ThirtyDays);
        assert!(!dashboard.show_baseline);
    }
}
