use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinate as returned by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions for one city.
///
/// Transient view state: the dashboard replaces it wholesale on every
/// successful lookup, it is never partially merged and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Display name reported by the provider.
    pub city: String,
    pub temperature_c: f64,
    /// Coarse condition label, e.g. "Rain" or "Clear". Matched
    /// case-insensitively by the advisory rules.
    pub condition: String,
    /// Longer human-readable description, e.g. "light rain".
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub coord: Coord,
    /// Sunrise/sunset as absolute epoch seconds, when the provider reports them.
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    /// Signed offset of the city's local time from UTC, in seconds.
    pub utc_offset_secs: i64,
}

/// One raw 3-hourly entry from the provider's forecast list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastEntry {
    pub dt: i64,
    pub temp_c: f64,
}

/// One display-ready point of the multi-day temperature series.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub label: String,
    pub temp_c: f64,
}

/// The forecast list carries 3-hour intervals, so every 8th entry is
/// roughly one sample per day.
pub const DAILY_STRIDE: usize = 8;

/// Sample the 3-hourly forecast list down to approximately one point per day.
///
/// The trend view is built from forecast data rather than real history, a
/// known limitation of the provider's free tier.
pub fn daily_series(entries: &[ForecastEntry]) -> Vec<ForecastPoint> {
    entries
        .iter()
        .step_by(DAILY_STRIDE)
        .map(|entry| ForecastPoint {
            label: date_label(entry.dt),
            temp_c: entry.temp_c,
        })
        .collect()
}

fn date_label(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Air-quality index on the provider's 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQuality {
    pub index: u8,
}

impl AirQuality {
    pub fn description(&self) -> &'static str {
        match self.index {
            1 => "Good",
            2 => "Fair",
            3 => "Moderate",
            4 => "Poor",
            5 => "Very Poor",
            _ => "Unknown",
        }
    }
}
