//! Error types and handling for the weather board

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for the weather board
#[derive(Error, Debug)]
pub enum WeatherBoardError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Geolocation failed; callers degrade to the default location
    #[error("Location unavailable: {message}")]
    Location { message: String },

    /// Weather endpoint returned an error status or the transport failed
    #[error("Fetch failed{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    /// Provider payload did not match the expected shape
    #[error("Parse failed: {message}")]
    ParseFailed { message: String },

    /// No forecast samples exist for the requested day
    #[error("No forecast data for {date}")]
    NoDataForDay { date: NaiveDate },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherBoardError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new location error
    pub fn location<S: Into<String>>(message: S) -> Self {
        Self::Location {
            message: message.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        Self::FetchFailed {
            status,
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::ParseFailed {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherBoardError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            WeatherBoardError::Location { .. } => {
                "Unable to determine your location. Showing the default city instead.".to_string()
            }
            WeatherBoardError::FetchFailed { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            WeatherBoardError::ParseFailed { .. } => {
                "The weather service returned an unexpected response.".to_string()
            }
            WeatherBoardError::NoDataForDay { date } => {
                format!("No forecast data available for {date}.")
            }
            WeatherBoardError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for WeatherBoardError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::ParseFailed {
                message: error.to_string(),
            }
        } else {
            Self::FetchFailed {
                status: error.status().map(|status| status.as_u16()),
                message: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherBoardError::config("missing API key");
        assert!(matches!(config_err, WeatherBoardError::Config { .. }));

        let fetch_err = WeatherBoardError::fetch(Some(404), "not found");
        assert!(matches!(
            fetch_err,
            WeatherBoardError::FetchFailed {
                status: Some(404),
                ..
            }
        ));

        let parse_err = WeatherBoardError::parse("missing field");
        assert!(matches!(parse_err, WeatherBoardError::ParseFailed { .. }));
    }

    #[test]
    fn test_fetch_error_display_includes_status() {
        let err = WeatherBoardError::fetch(Some(503), "service unavailable");
        assert!(err.to_string().contains("HTTP 503"));

        let err = WeatherBoardError::fetch(None, "connection refused");
        assert!(!err.to_string().contains("HTTP"));
    }

    #[test]
    fn test_user_messages() {
        let config_err = WeatherBoardError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let fetch_err = WeatherBoardError::fetch(None, "test");
        assert!(fetch_err.user_message().contains("Unable to reach"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let board_err: WeatherBoardError = io_err.into();
        assert!(matches!(board_err, WeatherBoardError::Io { .. }));
    }
}
