//! Plain-text rendering of dashboard widgets.

use smartweather_core::astro::{countdown_to, local_clock_time};
use smartweather_core::model::{AirQuality, ForecastPoint, WeatherSnapshot};

/// Main weather card for the currently displayed city.
pub fn weather_card(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{}\n{:.0}°C  {}\nHumidity: {}%\nWind: {} m/s",
        snapshot.city,
        snapshot.temperature_c.round(),
        snapshot.description,
        snapshot.humidity_pct,
        snapshot.wind_speed_mps,
    )
}

/// One-line card used by the nearby/recent comparison grid.
pub fn compact_card(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{:<20} {:>4.0}°C  {}",
        snapshot.city,
        snapshot.temperature_c.round(),
        snapshot.condition,
    )
}

pub fn air_quality_line(aqi: AirQuality) -> String {
    format!("Air Quality Index: {} ({})", aqi.index, aqi.description())
}

/// Sunrise/sunset widget: local wall-clock times for the city plus a
/// countdown snapshot in the viewer's own time.
pub fn sun_times(snapshot: &WeatherSnapshot) -> String {
    format!(
        "Sunrise {}  (in {})\nSunset  {}  (in {})",
        local_clock_time(snapshot.sunrise, snapshot.utc_offset_secs),
        countdown_to(snapshot.sunrise),
        local_clock_time(snapshot.sunset, snapshot.utc_offset_secs),
        countdown_to(snapshot.sunset),
    )
}

/// Multi-day temperature trend as a simple table.
pub fn forecast_table(points: &[ForecastPoint]) -> String {
    points
        .iter()
        .map(|point| format!("{}  {:>5.1}°C", point.label, point.temp_c))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartweather_core::model::Coord;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            city: "Delhi".to_string(),
            temperature_c: 28.4,
            condition: "Rain".to_string(),
            description: "light rain".to_string(),
            humidity_pct: 74,
            wind_speed_mps: 3.6,
            coord: Coord { lat: 28.6667, lon: 77.2167 },
            sunrise: None,
            sunset: None,
            utc_offset_secs: 19_800,
        }
    }

    #[test]
    fn weather_card_rounds_the_temperature() {
        let card = weather_card(&snapshot());
        assert!(card.starts_with("Delhi\n28°C  light rain"));
        assert!(card.contains("Humidity: 74%"));
        assert!(card.contains("Wind: 3.6 m/s"));
    }

    #[test]
    fn compact_card_is_a_single_line() {
        let card = compact_card(&snapshot());
        assert!(!card.contains('\n'));
        assert!(card.starts_with("Delhi"));
        assert!(card.ends_with("Rain"));
    }

    #[test]
    fn sun_times_show_placeholders_without_event_data() {
        let rendered = sun_times(&snapshot());
        assert!(rendered.contains("--:--:--"));
        assert!(rendered.contains("N/A"));
    }

    #[test]
    fn forecast_table_renders_one_line_per_point() {
        let points = vec![
            ForecastPoint { label: "2023-11-15".to_string(), temp_c: 12.5 },
            ForecastPoint { label: "2023-11-16".to_string(), temp_c: 14.0 },
        ];

        let table = forecast_table(&points);
        assert_eq!(table.lines().count(), 2);
        assert!(table.contains("2023-11-15   12.5°C"));
    }
}
