//! OpenWeatherMap client
//!
//! Two endpoints are used: `/weather` for a single current-conditions
//! observation and `/forecast` for the 5-day list of 3-hour entries. Both
//! are keyed by coordinate and API credential. Requests carry a client-wide
//! timeout so a stalled upstream cannot wedge a refresh cycle.

use crate::config::ProviderConfig;
use crate::error::WeatherBoardError;
use crate::models::{Coordinate, ForecastSet, Observation};
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, WeatherBoardError>;

/// Async client for the weather provider
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl WeatherClient {
    /// Build a client from provider configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| WeatherBoardError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    /// Fetch the current-conditions observation for a coordinate
    pub async fn current(&self, coordinate: Coordinate) -> Result<Observation> {
        debug!(
            "Fetching current conditions for {}",
            coordinate.format()
        );
        let url = format!("{}/weather", self.base_url);
        let payload: dto::CurrentResponse = self.get_json(&url, coordinate).await?;
        payload.into_observation()
    }

    /// Fetch the 5-day/3-hour forecast for a coordinate
    pub async fn forecast(&self, coordinate: Coordinate) -> Result<ForecastSet> {
        debug!("Fetching 5-day forecast for {}", coordinate.format());
        let url = format!("{}/forecast", self.base_url);
        let payload: dto::ForecastResponse = self.get_json(&url, coordinate).await?;
        payload.into_forecast_set()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        coordinate: Coordinate,
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .query(&[
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
                ("lang", self.language.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherBoardError::fetch(
                Some(status.as_u16()),
                format!("weather request to {url} failed: {status}"),
            ));
        }

        Ok(response.json().await?)
    }
}

/// OpenWeatherMap response structures and conversion utilities
mod dto {
    use super::{Observation, Result, WeatherBoardError};
    use crate::models::{ForecastSample, ForecastSet};
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    /// Current-conditions response from the `/weather` endpoint
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        pub dt: i64,
        pub timezone: i32,
        pub main: MainData,
        pub weather: Vec<ConditionData>,
        pub wind: WindData,
    }

    /// 5-day forecast response from the `/forecast` endpoint
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
        pub city: CityData,
    }

    /// One 3-hour entry in the forecast list
    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        pub dt: i64,
        pub main: MainData,
        pub weather: Vec<ConditionData>,
        pub wind: WindData,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f32,
        pub temp_min: f32,
        pub temp_max: f32,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionData {
        pub description: String,
        pub icon: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindData {
        pub speed: f32,
    }

    #[derive(Debug, Deserialize)]
    pub struct CityData {
        pub name: String,
        pub timezone: i32,
    }

    fn parse_timestamp(epoch_seconds: i64) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp(epoch_seconds, 0).ok_or_else(|| {
            WeatherBoardError::parse(format!("timestamp out of range: {epoch_seconds}"))
        })
    }

    fn primary_condition(conditions: &[ConditionData]) -> Result<&ConditionData> {
        conditions
            .first()
            .ok_or_else(|| WeatherBoardError::parse("response carries no weather condition"))
    }

    impl CurrentResponse {
        pub fn into_observation(self) -> Result<Observation> {
            let condition = primary_condition(&self.weather)?;
            Ok(Observation {
                timestamp: parse_timestamp(self.dt)?,
                temperature: self.main.temp,
                temp_min: self.main.temp_min,
                temp_max: self.main.temp_max,
                humidity: self.main.humidity,
                wind_speed: self.wind.speed,
                description: condition.description.clone(),
                icon: condition.icon.clone(),
                city_name: self.name,
                utc_offset_seconds: self.timezone,
            })
        }
    }

    impl ForecastResponse {
        pub fn into_forecast_set(self) -> Result<ForecastSet> {
            let mut samples = Vec::with_capacity(self.list.len());
            for entry in self.list {
                let condition = primary_condition(&entry.weather)?;
                samples.push(ForecastSample {
                    timestamp: parse_timestamp(entry.dt)?,
                    temperature: entry.main.temp,
                    temp_min: entry.main.temp_min,
                    temp_max: entry.main.temp_max,
                    humidity: entry.main.humidity,
                    wind_speed: entry.wind.speed,
                    description: condition.description.clone(),
                    icon: condition.icon.clone(),
                });
            }
            Ok(ForecastSet::new(samples, self.city.timezone))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_current_response_deserializes() {
            let json = r#"{
                "name": "Suwon-si",
                "dt": 1767312000,
                "timezone": 32400,
                "main": {"temp": 21.6, "temp_min": 18.2, "temp_max": 23.1, "humidity": 55},
                "weather": [{"description": "맑음", "icon": "01d"}],
                "wind": {"speed": 2.3}
            }"#;

            let response: CurrentResponse = serde_json::from_str(json).unwrap();
            let observation = response.into_observation().unwrap();
            assert_eq!(observation.city_name, "Suwon-si");
            assert_eq!(observation.utc_offset_seconds, 32400);
            assert_eq!(observation.humidity, 55);
            assert_eq!(observation.icon, "01d");
        }

        #[test]
        fn test_forecast_response_consumes_list_field() {
            let json = r#"{
                "city": {"name": "Seoul", "timezone": 32400},
                "list": [
                    {
                        "dt": 1767312000,
                        "main": {"temp": 10.0, "temp_min": 9.0, "temp_max": 11.0, "humidity": 70},
                        "weather": [{"description": "구름 조금", "icon": "02d"}],
                        "wind": {"speed": 4.1}
                    },
                    {
                        "dt": 1767322800,
                        "main": {"temp": 14.5, "temp_min": 13.0, "temp_max": 15.0, "humidity": 60},
                        "weather": [{"description": "맑음", "icon": "01d"}],
                        "wind": {"speed": 3.0}
                    }
                ]
            }"#;

            let response: ForecastResponse = serde_json::from_str(json).unwrap();
            let set = response.into_forecast_set().unwrap();
            assert_eq!(set.samples.len(), 2);
            assert_eq!(set.utc_offset_seconds, 32400);
            assert_eq!(set.samples[0].description, "구름 조금");
            assert!(set.samples[0].timestamp < set.samples[1].timestamp);
        }

        #[test]
        fn test_missing_condition_is_parse_error() {
            let json = r#"{
                "name": "Seoul",
                "dt": 1767312000,
                "timezone": 32400,
                "main": {"temp": 21.6, "temp_min": 18.2, "temp_max": 23.1, "humidity": 55},
                "weather": [],
                "wind": {"speed": 2.3}
            }"#;

            let response: CurrentResponse = serde_json::from_str(json).unwrap();
            let error = response.into_observation().unwrap_err();
            assert!(matches!(error, WeatherBoardError::ParseFailed { .. }));
        }
    }
}
