//! `weatherboard` - three-day weather summaries for a resolved location
//!
//! This library resolves a geographic location, retrieves current
//! conditions and a 5-day/3-hour forecast from OpenWeatherMap, buckets the
//! forecast into daily summaries, and hands today / tomorrow / day-after
//! cards to a render sink, on demand and on a periodic timer.

pub mod aggregate;
pub mod board;
pub mod config;
pub mod error;
pub mod locate;
pub mod localize;
pub mod models;
pub mod openweather;
pub mod render;
pub mod theme;

// Re-export core types for public API
pub use aggregate::bucket_by_day;
pub use board::WeatherBoard;
pub use config::WeatherboardConfig;
pub use error::WeatherBoardError;
pub use locate::{LocationChoice, LocationError, LocationProvider, UnsupportedProvider};
pub use localize::localize;
pub use models::{
    Coordinate, DailySummary, DaySlot, ForecastSample, ForecastSet, Location, Observation,
};
pub use openweather::WeatherClient;
pub use render::{ConsoleRenderer, RenderSink};
pub use theme::{Theme, ThemeStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherBoardError>;
