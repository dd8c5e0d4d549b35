use crate::advice::{self, Advice};
use crate::model::WeatherSnapshot;
use crate::recent::RecentCities;
use crate::store::KvStore;

/// Outcome of accepting a freshly fetched snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub advice: Advice,
    /// One-shot severe-weather alert. `None` when nothing severe matched;
    /// re-rendering the accepted snapshot never produces it again.
    pub alert: Option<&'static str>,
}

/// Centrally-owned dashboard state.
///
/// Owns the currently displayed snapshot and the persisted search history,
/// and feeds raw snapshot fields into the pure derivation components. The
/// recency list is the only state that outlives the session.
#[derive(Debug)]
pub struct Dashboard<S> {
    snapshot: Option<WeatherSnapshot>,
    recent: RecentCities<S>,
}

impl<S: KvStore> Dashboard<S> {
    pub fn load(store: S) -> Self {
        Self {
            snapshot: None,
            recent: RecentCities::load(store),
        }
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn recent_cities(&self) -> &[String] {
        self.recent.cities()
    }

    pub fn last_city(&self) -> Option<String> {
        self.recent.last_city()
    }

    /// Replace the displayed snapshot wholesale.
    ///
    /// The severe-weather alert is evaluated exactly once here. For by-name
    /// lookups, `searched_name` is the query the user typed; it enters the
    /// recency list and becomes the last viewed city. Coordinate lookups pass
    /// `None`: they update the last viewed city from the snapshot's display
    /// name but do not enter the recency list.
    pub fn accept_snapshot(
        &mut self,
        snapshot: WeatherSnapshot,
        searched_name: Option<&str>,
    ) -> Accepted {
        let alert = advice::severe_alert(&snapshot.condition, snapshot.temperature_c);
        let advice = advice::suggest(snapshot.temperature_c, &snapshot.condition);

        match searched_name {
            Some(name) if !name.is_empty() => {
                self.recent.record_visit(name);
                self.recent.set_last_city(name);
            }
            _ => self.recent.set_last_city(&snapshot.city),
        }

        self.snapshot = Some(snapshot);

        Accepted { advice, alert }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coord;
    use crate::store::MemoryStore;

    fn snapshot(city: &str, temp_c: f64, condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city: city.to_string(),
            temperature_c: temp_c,
            condition: condition.to_string(),
            description: condition.to_lowercase(),
            humidity_pct: 50,
            wind_speed_mps: 2.0,
            coord: Coord { lat: 0.0, lon: 0.0 },
            sunrise: None,
            sunset: None,
            utc_offset_secs: 0,
        }
    }

    fn dashboard() -> Dashboard<MemoryStore> {
        Dashboard::load(MemoryStore::new())
    }

    #[test]
    fn by_name_lookup_records_recency_and_last_city() {
        let mut dash = dashboard();

        let accepted = dash.accept_snapshot(snapshot("Delhi", 22.0, "Clear"), Some("Delhi"));

        assert_eq!(accepted.alert, None);
        assert_eq!(dash.recent_cities(), ["Delhi"]);
        assert_eq!(dash.last_city().as_deref(), Some("Delhi"));
        assert_eq!(dash.snapshot().expect("snapshot accepted").city, "Delhi");
    }

    #[test]
    fn coordinate_lookup_skips_the_recency_list() {
        let mut dash = dashboard();

        dash.accept_snapshot(snapshot("Delhi", 22.0, "Clear"), None);

        assert!(dash.recent_cities().is_empty());
        assert_eq!(dash.last_city().as_deref(), Some("Delhi"));
    }

    #[test]
    fn snapshot_is_replaced_wholesale() {
        let mut dash = dashboard();

        dash.accept_snapshot(snapshot("Delhi", 40.0, "Clear"), Some("Delhi"));
        dash.accept_snapshot(snapshot("Mumbai", 28.0, "Haze"), Some("Mumbai"));

        let current = dash.snapshot().expect("snapshot accepted");
        assert_eq!(current.city, "Mumbai");
        assert_eq!(current.condition, "Haze");
        assert_eq!(dash.recent_cities(), ["Mumbai", "Delhi"]);
    }

    #[test]
    fn alert_fires_once_per_accepted_snapshot() {
        let mut dash = dashboard();

        let first = dash.accept_snapshot(snapshot("Delhi", 40.0, "Clear"), Some("Delhi"));
        assert_eq!(first.alert, Some("High temperature - stay hydrated!"));

        // A calm follow-up snapshot produces no alert; the earlier one is not
        // re-emitted by any later accept.
        let second = dash.accept_snapshot(snapshot("Delhi", 22.0, "Clear"), Some("Delhi"));
        assert_eq!(second.alert, None);
    }

    #[test]
    fn advice_is_derived_from_the_accepted_snapshot() {
        let mut dash = dashboard();

        let accepted = dash.accept_snapshot(snapshot("Delhi", 35.0, "Rain"), Some("Delhi"));

        assert!(accepted.advice.eat.contains("coconut water"));
        assert!(accepted.advice.hygiene.ends_with("Don't forget your umbrella!"));
        assert_eq!(accepted.alert, None);
    }
}
