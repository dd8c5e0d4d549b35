use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use smartweather_core::{
    Accepted, Config, Dashboard, FileStore, OpenWeatherClient, ProviderError, WeatherProvider,
    astro::CountdownTicker,
    model::daily_series,
};
use tracing::warn;

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "smartweather", version, about = "Smart Weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key.
    Configure,

    /// Show the dashboard for a city.
    Show {
        /// City name; defaults to the last viewed city, then the configured
        /// default. Spoken input enters here as its transcript.
        city: Option<String>,
    },

    /// Show the dashboard for explicit device coordinates.
    Locate {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },

    /// List recently searched cities, most recent first.
    Recent,

    /// Compare current conditions across recent and nearby cities.
    Compare,

    /// Live sunrise/sunset countdown, refreshed every second until Ctrl-C.
    Watch {
        /// City name; defaults like `show`.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(city).await,
            Command::Locate { lat, lon } => locate(lat, lon).await,
            Command::Recent => recent(),
            Command::Compare => compare().await,
            Command::Watch { city } => watch(city).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.api_key = Some(key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn open_dashboard() -> Result<Dashboard<FileStore>> {
    Ok(Dashboard::load(FileStore::open_default()?))
}

fn client_from(config: &Config) -> Result<OpenWeatherClient> {
    Ok(OpenWeatherClient::new(config.require_api_key()?.to_owned()))
}

/// City to display when none was given: last viewed, then configured default.
fn resolve_city(
    explicit: Option<String>,
    dashboard: &Dashboard<FileStore>,
    config: &Config,
) -> String {
    explicit
        .filter(|city| !city.is_empty())
        .or_else(|| dashboard.last_city())
        .unwrap_or_else(|| config.default_city.clone())
}

async fn show(city: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;
    let mut dashboard = open_dashboard()?;

    let city = resolve_city(city, &dashboard, &config);

    // Not-found is a blocking notice; prior persisted state stays intact.
    let snapshot = match client.current_by_name(&city).await {
        Ok(snapshot) => snapshot,
        Err(ProviderError::NotFound { .. }) => bail!("City not found: {city}"),
        Err(err) => return Err(err).context("Failed to fetch current weather"),
    };

    let accepted = dashboard.accept_snapshot(snapshot, Some(&city));
    render_dashboard(&client, &dashboard, &accepted).await;

    Ok(())
}

async fn locate(lat: f64, lon: f64) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;
    let mut dashboard = open_dashboard()?;

    let mut snapshot = client
        .current_by_coord(lat, lon)
        .await
        .context("Failed to fetch weather for your location")?;

    // Prefer the reverse-geocoded place name for display; failure to resolve
    // one only affects the label.
    match client.reverse_geocode(lat, lon).await {
        Ok(Some(name)) => snapshot.city = name,
        Ok(None) => {}
        Err(err) => warn!("reverse geocoding failed: {err}"),
    }

    let accepted = dashboard.accept_snapshot(snapshot, None);
    render_dashboard(&client, &dashboard, &accepted).await;

    Ok(())
}

/// Print the full dashboard for the accepted snapshot. Widget fetches that
/// fail (air quality, forecast) are logged and skipped without blocking the
/// rest of the page.
async fn render_dashboard(
    client: &OpenWeatherClient,
    dashboard: &Dashboard<FileStore>,
    accepted: &Accepted,
) {
    let Some(snapshot) = dashboard.snapshot() else {
        return;
    };

    if let Some(alert) = accepted.alert {
        println!("*** {alert} ***\n");
    }

    println!("{}", view::weather_card(snapshot));

    match client.air_quality(snapshot.coord.lat, snapshot.coord.lon).await {
        Ok(Some(aqi)) => println!("{}", view::air_quality_line(aqi)),
        Ok(None) => {}
        Err(err) => warn!("air quality unavailable: {err}"),
    }

    println!("\n{}", view::sun_times(snapshot));

    match client.forecast(snapshot.coord.lat, snapshot.coord.lon).await {
        Ok(entries) => {
            let series = daily_series(&entries);
            if !series.is_empty() {
                println!("\nTemperature trend (next 5 days):");
                println!("{}", view::forecast_table(&series));
            }
        }
        Err(err) => warn!("forecast unavailable: {err}"),
    }

    println!("\nWeather tips");
    println!("Eat: {}", accepted.advice.eat);
    println!("Hygiene: {}", accepted.advice.hygiene);
}

fn recent() -> Result<()> {
    let dashboard = open_dashboard()?;

    if dashboard.recent_cities().is_empty() {
        println!("No recent searches yet.");
        return Ok(());
    }

    for city in dashboard.recent_cities() {
        println!("{city}");
    }

    Ok(())
}

async fn compare() -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;
    let dashboard = open_dashboard()?;

    // Recent searches first, then the fixed nearby set, deduplicated.
    let mut cities: Vec<String> = dashboard.recent_cities().to_vec();
    for city in &config.nearby_cities {
        if !cities.contains(city) {
            cities.push(city.clone());
        }
    }

    for city in cities {
        match client.current_by_name(&city).await {
            Ok(snapshot) => println!("{}", view::compact_card(&snapshot)),
            Err(err) => warn!("skipping {city}: {err}"),
        }
    }

    Ok(())
}

async fn watch(city: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config)?;
    let dashboard = open_dashboard()?;

    let city = resolve_city(city, &dashboard, &config);

    let snapshot = match client.current_by_name(&city).await {
        Ok(snapshot) => snapshot,
        Err(ProviderError::NotFound { .. }) => bail!("City not found: {city}"),
        Err(err) => return Err(err).context("Failed to fetch current weather"),
    };

    println!("{}", snapshot.city);
    println!("{}\n", view::sun_times(&snapshot));

    // The ticker owns the only refresh timer; dropping it on exit cancels it.
    let ticker = CountdownTicker::start(snapshot.sunrise, snapshot.sunset);
    let mut updates = ticker.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let countdown = updates.borrow().clone();
                print!(
                    "\rSunrise in {}  |  Sunset in {}      ",
                    countdown.sunrise, countdown.sunset
                );
                std::io::stdout().flush().ok();
            }
        }
    }

    println!();
    Ok(())
}
