//! Configuration management for the weather board
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::WeatherBoardError;
use crate::models::Coordinate;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the weather board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherboardConfig {
    /// Weather provider configuration
    pub provider: ProviderConfig,
    /// Refresh scheduling configuration
    pub refresh: RefreshConfig,
    /// Fallback location used when geolocation fails
    pub default_location: DefaultLocationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the weather API
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
    /// Language code for condition descriptions
    #[serde(default = "default_provider_language")]
    pub language: String,
}

/// Refresh scheduling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Automatic refresh interval in minutes
    #[serde(default = "default_refresh_interval")]
    pub interval_minutes: u32,
    /// Timeout for geolocation resolution in seconds
    #[serde(default = "default_location_timeout")]
    pub location_timeout_seconds: u32,
}

/// Fallback location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultLocationConfig {
    /// Latitude in decimal degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Display name for the fallback city
    #[serde(default = "default_city")]
    pub city: String,
}

impl DefaultLocationConfig {
    /// Fallback coordinate
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_provider_timeout() -> u32 {
    30
}

fn default_provider_language() -> String {
    "kr".to_string()
}

fn default_refresh_interval() -> u32 {
    10
}

fn default_location_timeout() -> u32 {
    10
}

// Seoul, used when geolocation is denied, unavailable, or times out
fn default_latitude() -> f64 {
    37.5665
}

fn default_longitude() -> f64 {
    126.978
}

fn default_city() -> String {
    "서울".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherboardConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                api_key: String::new(),
                base_url: default_provider_base_url(),
                timeout_seconds: default_provider_timeout(),
                language: default_provider_language(),
            },
            refresh: RefreshConfig {
                interval_minutes: default_refresh_interval(),
                location_timeout_seconds: default_location_timeout(),
            },
            default_location: DefaultLocationConfig {
                latitude: default_latitude(),
                longitude: default_longitude(),
                city: default_city(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl WeatherboardConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. WEATHERBOARD_PROVIDER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("WEATHERBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WeatherboardConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weatherboard").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_provider()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate provider credentials and endpoint
    fn validate_provider(&self) -> Result<()> {
        if self.provider.api_key.is_empty() {
            return Err(WeatherBoardError::config(
                "Weather API key is required. Set WEATHERBOARD_PROVIDER__API_KEY or add it to the config file."
            ).into());
        }

        if self.provider.api_key.len() > 100 {
            return Err(WeatherBoardError::config(
                "Weather API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        if !self.provider.base_url.starts_with("http://")
            && !self.provider.base_url.starts_with("https://")
        {
            return Err(WeatherBoardError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.provider.timeout_seconds == 0 || self.provider.timeout_seconds > 300 {
            return Err(WeatherBoardError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.refresh.interval_minutes == 0 || self.refresh.interval_minutes > 1440 {
            return Err(WeatherBoardError::config(
                "Refresh interval must be between 1 minute and 1 day",
            )
            .into());
        }

        if self.refresh.location_timeout_seconds == 0 || self.refresh.location_timeout_seconds > 60
        {
            return Err(WeatherBoardError::config(
                "Location timeout must be between 1 and 60 seconds",
            )
            .into());
        }

        if !(-90.0..=90.0).contains(&self.default_location.latitude) {
            return Err(
                WeatherBoardError::config("Default latitude must be within -90..=90").into(),
            );
        }

        if !(-180.0..=180.0).contains(&self.default_location.longitude) {
            return Err(
                WeatherBoardError::config("Default longitude must be within -180..=180").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherBoardError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherBoardError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> WeatherboardConfig {
        let mut config = WeatherboardConfig::default();
        config.provider.api_key = "test_api_key_123".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = WeatherboardConfig::default();
        assert_eq!(
            config.provider.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.provider.timeout_seconds, 30);
        assert_eq!(config.provider.language, "kr");
        assert_eq!(config.refresh.interval_minutes, 10);
        assert_eq!(config.refresh.location_timeout_seconds, 10);
        assert_eq!(config.default_location.city, "서울");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_coordinate_is_seoul() {
        let coordinate = WeatherboardConfig::default().default_location.coordinate();
        assert!((coordinate.latitude - 37.5665).abs() < 1e-9);
        assert!((coordinate.longitude - 126.978).abs() < 1e-9);
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = WeatherboardConfig::default();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config_with_key().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = config_with_key();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_numeric_ranges() {
        let mut config = config_with_key();
        config.provider.timeout_seconds = 500;
        assert!(config.validate().is_err());

        let mut config = config_with_key();
        config.refresh.interval_minutes = 0;
        assert!(config.validate().is_err());

        let mut config = config_with_key();
        config.default_location.latitude = 123.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_base_url() {
        let mut config = config_with_key();
        config.provider.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = WeatherboardConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("weatherboard"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
