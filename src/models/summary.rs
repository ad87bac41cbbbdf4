//! Daily summary model and display formatting

use super::Observation;
use serde::{Deserialize, Serialize};

/// Icon code used when no real condition is known
const FALLBACK_ICON: &str = "01d";

/// Target display slot for a daily summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySlot {
    /// Current conditions, taken directly from the observation
    Today,
    /// First bucketed forecast day
    Tomorrow,
    /// Second bucketed forecast day
    DayAfter,
}

impl DaySlot {
    /// All slots in display order
    pub const ALL: [DaySlot; 3] = [DaySlot::Today, DaySlot::Tomorrow, DaySlot::DayAfter];

    /// Slot identifier handed to the rendering collaborator
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DaySlot::Today => "today",
            DaySlot::Tomorrow => "tomorrow",
            DaySlot::DayAfter => "day-after",
        }
    }
}

/// Summary of one calendar day's weather.
///
/// Numeric fields are `None` for the sentinel ("no data") and placeholder
/// ("data unavailable") states, which the formatters render as `--`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Representative temperature in Celsius
    pub temperature: Option<f32>,
    /// Daily minimum in Celsius
    pub temp_min: Option<f32>,
    /// Daily maximum in Celsius
    pub temp_max: Option<f32>,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: Option<u8>,
    /// Wind speed in m/s
    pub wind_speed: Option<f32>,
    /// Weather condition icon ID
    pub icon: String,
}

impl DailySummary {
    /// Sentinel summary for a day with no forecast samples
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            temperature: None,
            temp_min: None,
            temp_max: None,
            description: "데이터 없음".to_string(),
            humidity: None,
            wind_speed: None,
            icon: FALLBACK_ICON.to_string(),
        }
    }

    /// Placeholder summary shown in every slot when a refresh fails
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            temperature: None,
            temp_min: None,
            temp_max: None,
            description: "날씨 정보를 불러올 수 없습니다".to_string(),
            humidity: None,
            wind_speed: None,
            icon: FALLBACK_ICON.to_string(),
        }
    }

    /// Today's summary, taken directly from the current-conditions record.
    /// Uses the observation's own min/max fields, unlike bucketed days.
    #[must_use]
    pub fn from_observation(observation: &Observation) -> Self {
        Self {
            temperature: Some(observation.temperature),
            temp_min: Some(observation.temp_min),
            temp_max: Some(observation.temp_max),
            description: observation.description.clone(),
            humidity: Some(observation.humidity),
            wind_speed: Some(observation.wind_speed),
            icon: observation.icon.clone(),
        }
    }

    /// True for the sentinel and placeholder states
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
    }

    /// Representative temperature rounded to the nearest degree, or `--`
    #[must_use]
    pub fn format_temperature(&self) -> String {
        Self::format_degrees(self.temperature)
    }

    /// Daily range as "max° / min°", each side `--` when unknown
    #[must_use]
    pub fn format_range(&self) -> String {
        format!(
            "{} / {}",
            Self::format_degrees(self.temp_max),
            Self::format_degrees(self.temp_min)
        )
    }

    /// Humidity as a percentage, or `--`
    #[must_use]
    pub fn format_humidity(&self) -> String {
        match self.humidity {
            Some(humidity) => format!("{humidity}%"),
            None => "--".to_string(),
        }
    }

    /// Wind speed with one decimal, or `--`
    #[must_use]
    pub fn format_wind(&self) -> String {
        match self.wind_speed {
            Some(speed) => format!("{speed:.1} m/s"),
            None => "--".to_string(),
        }
    }

    fn format_degrees(value: Option<f32>) -> String {
        match value {
            Some(degrees) => format!("{}°", degrees.round() as i32),
            None => "--".to_string(),
        }
    }
}
