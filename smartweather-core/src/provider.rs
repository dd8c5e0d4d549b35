use crate::model::{AirQuality, ForecastEntry, WeatherSnapshot};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Errors at the weather-provider boundary.
///
/// `NotFound` is the only variant the view layer treats as a blocking notice;
/// transport and parse failures degrade the affected widget only. No variant
/// is ever retried.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no weather data found for '{query}'")]
    NotFound { query: String },

    #[error("{context} failed with status {status}: {body}")]
    Status {
        context: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{context} request failed")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context} returned malformed JSON")]
    Parse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Abstraction over the external weather provider.
///
/// All calls are fire-and-forget from the core's perspective: the caller
/// consumes resolved payloads and never blocks the rest of the dashboard on a
/// single widget's fetch.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions looked up by city name.
    async fn current_by_name(&self, city: &str) -> ProviderResult<WeatherSnapshot>;

    /// Current conditions looked up by device coordinates.
    async fn current_by_coord(&self, lat: f64, lon: f64) -> ProviderResult<WeatherSnapshot>;

    /// 3-hourly forecast list (~40 entries) backing the 5-day trend view.
    async fn forecast(&self, lat: f64, lon: f64) -> ProviderResult<Vec<ForecastEntry>>;

    /// Air-quality index for a coordinate, if the provider reports one.
    async fn air_quality(&self, lat: f64, lon: f64) -> ProviderResult<Option<AirQuality>>;

    /// Display name for a coordinate, if one can be resolved.
    async fn reverse_geocode(&self, lat: f64, lon: f64) -> ProviderResult<Option<String>>;
}
