//! Forecast aggregation: 3-hour samples bucketed into daily summaries
//!
//! The provider's 5-day forecast is a flat list of 3-hour entries. Each
//! target day is summarized by one representative sample (the entry closest
//! to local noon) plus a min/max range computed across the day's samples.

use crate::WeatherBoardError;
use crate::models::{DailySummary, ForecastSample};
use chrono::{FixedOffset, NaiveDate};
use tracing::debug;

/// Summarize all samples falling on `target_date` in the provider's local
/// timezone. Returns the sentinel summary when no samples match; never fails.
#[must_use]
pub fn bucket_by_day(
    samples: &[ForecastSample],
    utc_offset: FixedOffset,
    target_date: NaiveDate,
) -> DailySummary {
    match summarize_day(samples, utc_offset, target_date) {
        Ok(summary) => summary,
        Err(error) => {
            debug!("{error}");
            DailySummary::no_data()
        }
    }
}

fn summarize_day(
    samples: &[ForecastSample],
    utc_offset: FixedOffset,
    target_date: NaiveDate,
) -> Result<DailySummary, WeatherBoardError> {
    let day_samples: Vec<&ForecastSample> = samples
        .iter()
        .filter(|sample| sample.local_date(utc_offset) == target_date)
        .collect();

    let Some(first) = day_samples.first() else {
        return Err(WeatherBoardError::NoDataForDay { date: target_date });
    };

    // Representative sample: closest to local noon, first occurrence wins ties.
    let mut representative = *first;
    let mut best_distance = noon_distance(representative, utc_offset);
    for sample in &day_samples[1..] {
        let distance = noon_distance(sample, utc_offset);
        if distance < best_distance {
            best_distance = distance;
            representative = sample;
        }
    }

    // Daily range from the 3-hour temperatures, not the per-sample min/max fields.
    let mut temp_min = first.temperature;
    let mut temp_max = first.temperature;
    for sample in &day_samples {
        temp_min = temp_min.min(sample.temperature);
        temp_max = temp_max.max(sample.temperature);
    }

    Ok(DailySummary {
        temperature: Some(representative.temperature),
        temp_min: Some(temp_min),
        temp_max: Some(temp_max),
        description: representative.description.clone(),
        humidity: Some(representative.humidity),
        wind_speed: Some(representative.wind_speed),
        icon: representative.icon.clone(),
    })
}

fn noon_distance(sample: &ForecastSample, utc_offset: FixedOffset) -> u32 {
    sample.local_hour(utc_offset).abs_diff(12)
}
