//! Forecast set model wrapping the provider's 3-hour sample list

use super::ForecastSample;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Ordered 3-hour forecast samples covering 5 days, plus the provider's
/// timezone context needed to bucket them into local calendar days.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ForecastSet {
    /// Forecast samples in provider order (ascending timestamps)
    pub samples: Vec<ForecastSample>,
    /// Shift from UTC in seconds at the forecast location
    pub utc_offset_seconds: i32,
    /// When this forecast was retrieved
    pub retrieved_at: DateTime<Utc>,
}

impl ForecastSet {
    /// Create a new forecast set
    #[must_use]
    pub fn new(samples: Vec<ForecastSample>, utc_offset_seconds: i32) -> Self {
        Self {
            samples,
            utc_offset_seconds,
            retrieved_at: Utc::now(),
        }
    }

    /// The provider's UTC offset. Out-of-range offsets degrade to UTC.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }

    /// Today's calendar date in the forecast location's timezone
    #[must_use]
    pub fn local_today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset()).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_offset_valid() {
        let set = ForecastSet::new(Vec::new(), 9 * 3600);
        assert_eq!(set.utc_offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_utc_offset_out_of_range_falls_back_to_utc() {
        let set = ForecastSet::new(Vec::new(), 999_999);
        assert_eq!(set.utc_offset().local_minus_utc(), 0);
    }
}
