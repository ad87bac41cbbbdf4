//! Weather observation and forecast sample models

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One 3-hour forecast entry from the provider's 5-day list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastSample {
    /// Timestamp for this forecast slot
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Per-sample minimum reported by the provider.
    /// Daily ranges are computed from `temperature` across the day, not from this field.
    pub temp_min: f32,
    /// Per-sample maximum reported by the provider
    pub temp_max: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f32,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Weather condition icon ID from the provider
    pub icon: String,
}

impl ForecastSample {
    /// Calendar date of this sample in the provider's local timezone
    #[must_use]
    pub fn local_date(&self, utc_offset: FixedOffset) -> NaiveDate {
        self.timestamp.with_timezone(&utc_offset).date_naive()
    }

    /// Hour of day (0-23) of this sample in the provider's local timezone
    #[must_use]
    pub fn local_hour(&self, utc_offset: FixedOffset) -> u32 {
        self.timestamp.with_timezone(&utc_offset).hour()
    }
}

/// Single current-conditions record.
///
/// Supplies today's summary directly and carries the provider city name
/// used for display-name localization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Observation {
    /// Timestamp of the observation
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Minimum temperature reported for the observation area
    pub temp_min: f32,
    /// Maximum temperature reported for the observation area
    pub temp_max: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f32,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Weather condition icon ID from the provider
    pub icon: String,
    /// City name as reported by the provider (English)
    pub city_name: String,
    /// Shift from UTC in seconds at the observation site
    pub utc_offset_seconds: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_at(utc: DateTime<Utc>) -> ForecastSample {
        ForecastSample {
            timestamp: utc,
            temperature: 15.0,
            temp_min: 14.0,
            temp_max: 16.0,
            humidity: 60,
            wind_speed: 3.2,
            description: "맑음".to_string(),
            icon: "01d".to_string(),
        }
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        // 23:00 UTC is 08:00 the next day in KST (+9)
        let utc = Utc.with_ymd_and_hms(2026, 3, 1, 23, 0, 0).unwrap();
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let sample = sample_at(utc);

        assert_eq!(
            sample.local_date(kst),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
        assert_eq!(sample.local_hour(kst), 8);
    }

    #[test]
    fn test_local_hour_zero_offset() {
        let utc = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let zero = FixedOffset::east_opt(0).unwrap();
        assert_eq!(sample_at(utc).local_hour(zero), 12);
    }
}
