//! Rendering collaborator boundary
//!
//! The board hands each [`DailySummary`] to a [`RenderSink`] together with
//! its target slot and expects nothing back. The console renderer is the
//! default implementation.

use crate::models::{DailySummary, DaySlot};

/// Receives daily summaries for display
pub trait RenderSink: Send + Sync {
    /// Render one summary into the given slot
    fn render(&self, slot: DaySlot, summary: &DailySummary);
}

/// Plain-text renderer writing one card line per slot
pub struct ConsoleRenderer;

impl RenderSink for ConsoleRenderer {
    fn render(&self, slot: DaySlot, summary: &DailySummary) {
        println!(
            "[{:>9}] {} {:>4} {} ({})  humidity {}  wind {}",
            slot.as_str(),
            icon_emoji(&summary.icon),
            summary.format_temperature(),
            summary.description,
            summary.format_range(),
            summary.format_humidity(),
            summary.format_wind(),
        );
    }
}

/// Map a provider icon code to an emoji
#[must_use]
pub fn icon_emoji(icon: &str) -> &'static str {
    match icon {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" | "10n" => "🌧️",
        "10d" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "❄️",
        "50d" | "50n" => "🌫️",
        _ => "🌤️",
    }
}
