use tracing::warn;

use crate::store::{KvStore, LAST_CITY_KEY, RECENT_CITIES_KEY};

/// Maximum number of entries kept in the recency list.
pub const RECENT_CAPACITY: usize = 8;

/// Recency-deduplicated history of searched city names, most-recent-first,
/// persisted after every mutation.
///
/// Names are compared by exact string equality: "delhi" and "Delhi" are
/// distinct entries. That mirrors the provider-facing behavior and is a known
/// limitation, not a feature. Entries only age out via capacity eviction;
/// there is no delete operation.
#[derive(Debug)]
pub struct RecentCities<S> {
    store: S,
    cities: Vec<String>,
}

impl<S: KvStore> RecentCities<S> {
    /// Load persisted history. Absent or malformed state degrades to an empty
    /// list, never an error.
    pub fn load(store: S) -> Self {
        let cities = store
            .get(RECENT_CITIES_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();

        Self { store, cities }
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Record a successful by-name lookup: the name moves to the front, any
    /// other occurrence of the same exact string is dropped, the list is
    /// truncated to capacity and persisted. Returns the updated list.
    ///
    /// Empty input is ignored; callers are expected to guard against it.
    pub fn record_visit(&mut self, city: &str) -> &[String] {
        if city.is_empty() {
            return &self.cities;
        }

        self.cities.retain(|c| c != city);
        self.cities.insert(0, city.to_string());
        self.cities.truncate(RECENT_CAPACITY);
        self.persist();

        &self.cities
    }

    /// Last successfully viewed city, if any session has stored one.
    pub fn last_city(&self) -> Option<String> {
        self.store.get(LAST_CITY_KEY)
    }

    pub fn set_last_city(&mut self, city: &str) {
        self.store.set(LAST_CITY_KEY, city);
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.cities) {
            Ok(json) => self.store.set(RECENT_CITIES_KEY, &json),
            Err(err) => warn!("failed to serialize recent cities: {err}"),
        }
    }
}
