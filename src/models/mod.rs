//! Data models for weather information
//!
//! Internal representations of locations, observations, forecast samples,
//! and the per-day summaries handed to the renderer. Provider response
//! types live with the client in [`crate::openweather`].

pub mod forecast;
pub mod location;
pub mod summary;
pub mod weather;

pub use forecast::ForecastSet;
pub use location::{Coordinate, Location};
pub use summary::{DailySummary, DaySlot};
pub use weather::{ForecastSample, Observation};
