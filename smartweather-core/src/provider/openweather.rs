use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{AirQuality, Coord, ForecastEntry, WeatherSnapshot};

use super::{ProviderError, ProviderResult, WeatherProvider};

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const AIR_POLLUTION_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";
const REVERSE_GEO_URL: &str = "https://api.openweathermap.org/geo/1.0/reverse";

const UNITS: &str = "metric";

/// Client for the OpenWeather current/forecast/air-pollution/geocoding APIs.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        context: &'static str,
    ) -> ProviderResult<T> {
        debug!("requesting {context}");

        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { context, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Transport { context, source })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                context,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ProviderError::Parse { context, source })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    coord: Coord,
    sys: Option<OwSys>,
    timezone: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastItem {
    dt: i64,
    main: OwForecastMain,
}

#[derive(Debug, Deserialize)]
struct OwForecast {
    list: Vec<OwForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwPollutionMain {
    aqi: u8,
}

#[derive(Debug, Deserialize)]
struct OwPollutionItem {
    main: OwPollutionMain,
}

#[derive(Debug, Deserialize)]
struct OwPollution {
    list: Vec<OwPollutionItem>,
}

#[derive(Debug, Deserialize)]
struct OwGeoPlace {
    name: String,
}

fn snapshot_from(parsed: OwCurrent) -> WeatherSnapshot {
    let (condition, description) = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| (w.main, w.description))
        .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

    let (sunrise, sunset) = parsed
        .sys
        .map(|sys| (sys.sunrise, sys.sunset))
        .unwrap_or((None, None));

    WeatherSnapshot {
        city: parsed.name,
        temperature_c: parsed.main.temp,
        condition,
        description,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        coord: parsed.coord,
        sunrise,
        sunset,
        utc_offset_secs: parsed.timezone.unwrap_or(0),
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_by_name(&self, city: &str) -> ProviderResult<WeatherSnapshot> {
        let query = [("q", city), ("units", UNITS)];

        let parsed: OwCurrent = match self
            .get_json(CURRENT_URL, &query, "OpenWeather current weather")
            .await
        {
            Err(ProviderError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                return Err(ProviderError::NotFound {
                    query: city.to_string(),
                });
            }
            other => other?,
        };

        Ok(snapshot_from(parsed))
    }

    async fn current_by_coord(&self, lat: f64, lon: f64) -> ProviderResult<WeatherSnapshot> {
        let (lat, lon) = (lat.to_string(), lon.to_string());
        let query = [("lat", lat.as_str()), ("lon", lon.as_str()), ("units", UNITS)];

        let parsed: OwCurrent = self
            .get_json(CURRENT_URL, &query, "OpenWeather current weather")
            .await?;

        Ok(snapshot_from(parsed))
    }

    async fn forecast(&self, lat: f64, lon: f64) -> ProviderResult<Vec<ForecastEntry>> {
        let (lat, lon) = (lat.to_string(), lon.to_string());
        let query = [("lat", lat.as_str()), ("lon", lon.as_str()), ("units", UNITS)];

        let parsed: OwForecast = self
            .get_json(FORECAST_URL, &query, "OpenWeather forecast")
            .await?;

        Ok(parsed
            .list
            .into_iter()
            .map(|item| ForecastEntry {
                dt: item.dt,
                temp_c: item.main.temp,
            })
            .collect())
    }

    async fn air_quality(&self, lat: f64, lon: f64) -> ProviderResult<Option<AirQuality>> {
        let (lat, lon) = (lat.to_string(), lon.to_string());
        let query = [("lat", lat.as_str()), ("lon", lon.as_str())];

        let parsed: OwPollution = self
            .get_json(AIR_POLLUTION_URL, &query, "OpenWeather air pollution")
            .await?;

        Ok(parsed
            .list
            .first()
            .map(|item| AirQuality { index: item.main.aqi }))
    }

    async fn reverse_geocode(&self, lat: f64, lon: f64) -> ProviderResult<Option<String>> {
        let (lat, lon) = (lat.to_string(), lon.to_string());
        let query = [("lat", lat.as_str()), ("lon", lon.as_str()), ("limit", "1")];

        let parsed: Vec<OwGeoPlace> = self
            .get_json(REVERSE_GEO_URL, &query, "OpenWeather reverse geocoding")
            .await?;

        Ok(parsed.into_iter().next().map(|place| place.name))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
