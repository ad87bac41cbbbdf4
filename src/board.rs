//! Weather board orchestration
//!
//! One refresh cycle resolves a location, fetches current conditions and
//! the 5-day forecast, buckets tomorrow and the day after, and hands three
//! daily summaries to the render sink. Refreshes run on demand and on a
//! periodic timer; a failed cycle renders the same placeholder into every
//! slot and never surfaces an error to the caller.

use crate::aggregate::bucket_by_day;
use crate::config::WeatherboardConfig;
use crate::locate::{self, LocationChoice, LocationProvider};
use crate::localize::localize;
use crate::models::{Coordinate, DailySummary, DaySlot, Location};
use crate::openweather::WeatherClient;
use crate::render::RenderSink;
use anyhow::{Context, Result};
use chrono::{DateTime, Days, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Orchestrates location resolution, fetching, aggregation, and rendering.
///
/// Owns the mutable location state and the last-updated timestamp; nothing
/// else writes them.
pub struct WeatherBoard {
    config: WeatherboardConfig,
    client: WeatherClient,
    locator: Arc<dyn LocationProvider>,
    sink: Arc<dyn RenderSink>,
    choice: LocationChoice,
    location: Location,
    last_updated: Option<DateTime<Utc>>,
}

impl WeatherBoard {
    /// Build a board from validated configuration
    pub fn new(
        config: WeatherboardConfig,
        locator: Arc<dyn LocationProvider>,
        sink: Arc<dyn RenderSink>,
    ) -> crate::Result<Self> {
        let client = WeatherClient::new(&config.provider)?;
        let location = Location::new(
            config.default_location.coordinate(),
            config.default_location.city.clone(),
        );

        Ok(Self {
            config,
            client,
            locator,
            sink,
            choice: LocationChoice::Auto,
            location,
            last_updated: None,
        })
    }

    /// Current resolved location state
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Completion time of the last successful refresh
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Switch between automatic geolocation and a manually selected
    /// coordinate. Takes effect on the next refresh.
    pub fn set_choice(&mut self, choice: LocationChoice) {
        debug!("Location choice changed: {choice:?}");
        self.choice = choice;
    }

    /// Run one full refresh cycle. Never returns an error: any fetch or
    /// parse failure degrades to a uniform placeholder in all three slots.
    pub async fn refresh_all(&mut self) {
        info!("Refreshing weather board");
        match self.try_refresh().await {
            Ok(()) => {
                self.last_updated = Some(Utc::now());
                info!("Refresh complete for {}", self.location.city);
            }
            Err(error) => {
                warn!("Refresh failed: {error:#}");
                let placeholder = DailySummary::unavailable();
                for slot in DaySlot::ALL {
                    self.sink.render(slot, &placeholder);
                }
            }
        }
    }

    async fn try_refresh(&mut self) -> Result<()> {
        let coordinate = self.resolve_coordinate().await;

        // Current conditions come first: they supply the provider city name
        // used for the localized display state.
        let observation = self
            .client
            .current(coordinate)
            .await
            .context("current-conditions fetch failed")?;
        let city = localize(&observation.city_name);
        debug!("City name: {} -> {}", observation.city_name, city);
        self.location = Location::new(coordinate, city);

        let forecast = self
            .client
            .forecast(coordinate)
            .await
            .context("forecast fetch failed")?;

        let utc_offset = forecast.utc_offset();
        let today = forecast.local_today();
        let tomorrow = today + Days::new(1);
        let day_after = today + Days::new(2);

        let today_summary = DailySummary::from_observation(&observation);
        let tomorrow_summary = bucket_by_day(&forecast.samples, utc_offset, tomorrow);
        let day_after_summary = bucket_by_day(&forecast.samples, utc_offset, day_after);

        self.sink.render(DaySlot::Today, &today_summary);
        self.sink.render(DaySlot::Tomorrow, &tomorrow_summary);
        self.sink.render(DaySlot::DayAfter, &day_after_summary);

        Ok(())
    }

    async fn resolve_coordinate(&self) -> Coordinate {
        match self.choice {
            LocationChoice::Fixed(coordinate) => coordinate,
            LocationChoice::Auto => {
                locate::resolve(
                    self.locator.as_ref(),
                    Duration::from_secs(u64::from(self.config.refresh.location_timeout_seconds)),
                    self.config.default_location.coordinate(),
                )
                .await
            }
        }
    }

    /// Refresh immediately, then on every timer tick until `shutdown`
    /// fires. Cycles run sequentially; an overlapping manual trigger from
    /// another task is neither prevented nor coordinated.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let interval = Duration::from_secs(u64::from(self.config.refresh.interval_minutes) * 60);
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Auto-refresh every {} minutes",
            self.config.refresh.interval_minutes
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.refresh_all().await,
                _ = shutdown.changed() => {
                    info!("Shutting down, cancelling refresh timer");
                    break;
                }
            }
        }
    }
}
