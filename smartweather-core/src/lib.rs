//! Core library for the Smart Weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Persisted key-value state and the recency-deduplicated search history
//! - Sunrise/sunset local-time and countdown computation
//! - Advisory rules (food/hygiene tips, severe-weather alerts)
//! - Abstraction over the external weather provider
//!
//! It is used by `smartweather-cli`, but can also be reused by other
//! binaries or services.

pub mod advice;
pub mod astro;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod provider;
pub mod recent;
pub mod store;

pub use advice::Advice;
pub use config::Config;
pub use dashboard::{Accepted, Dashboard};
pub use model::{AirQuality, Coord, ForecastEntry, ForecastPoint, WeatherSnapshot};
pub use provider::{OpenWeatherClient, ProviderError, WeatherProvider};
pub use recent::RecentCities;
pub use store::{FileStore, KvStore, MemoryStore};
