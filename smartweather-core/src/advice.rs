//! Deterministic advisory rules derived from the current conditions.
//!
//! Two independent decision tables: everyday food/hygiene guidance, and a
//! one-shot alert for severe conditions. Both are pure functions; the
//! dashboard evaluates the alert exactly once per accepted snapshot.

/// Food and hygiene guidance for the current conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub eat: String,
    pub hygiene: String,
}

/// Derive guidance from temperature and condition label.
///
/// The three temperature bands partition all reals: above 30 is hot, 15..=30
/// is mild, everything below 15 falls to cold. The hygiene text then gets at
/// most one condition-based append, matched case-insensitively.
pub fn suggest(temp_c: f64, condition: &str) -> Advice {
    let (eat, hygiene) = if temp_c > 30.0 {
        (
            "Stay hydrated - drink coconut water or lemon juice.",
            "Use sunscreen and shower twice a day.",
        )
    } else if temp_c >= 15.0 {
        (
            "Enjoy light meals - fruits, veggies & salads.",
            "Maintain daily hygiene and moisturize regularly.",
        )
    } else {
        (
            "Have warm soups and herbal tea to stay cozy.",
            "Use hydrating cream and wear warm clothes.",
        )
    };

    let mut hygiene = hygiene.to_string();
    let label = condition.to_lowercase();
    if label.contains("rain") {
        hygiene.push_str(" Don't forget your umbrella!");
    } else if label.contains("dust") || label.contains("smoke") {
        hygiene.push_str(" Wear a mask outdoors.");
    }

    Advice {
        eat: eat.to_string(),
        hygiene,
    }
}

/// Alert message for severe conditions, first matching rule wins.
///
/// Evaluated at the moment a new snapshot is accepted, not on re-render.
pub fn severe_alert(condition: &str, temp_c: f64) -> Option<&'static str> {
    let label = condition.to_lowercase();

    if label.contains("storm") {
        Some("Storm alert! Stay indoors.")
    } else if label.contains("rain") && temp_c < 25.0 {
        Some("Heavy rain expected - carry an umbrella!")
    } else if label.contains("snow") {
        Some("Snowy conditions - stay warm!")
    } else if temp_c > 38.0 {
        Some("High temperature - stay hydrated!")
    } else if temp_c < 5.0 {
        Some("Very cold weather - dress warmly!")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_bands_partition_all_inputs() {
        // Inclusive boundaries: 15 and 30 are both mild, 30.01 is hot,
        // 14.99 is cold. No gap, no overlap, no empty text anywhere.
        let mild = suggest(15.0, "Clear");
        assert_eq!(mild, suggest(30.0, "Clear"));
        assert!(mild.eat.contains("light meals"));

        assert!(suggest(30.01, "Clear").eat.contains("hydrated"));
        assert!(suggest(14.99, "Clear").eat.contains("warm soups"));

        for temp in [-60.0, -5.0, 0.0, 14.9, 15.0, 22.5, 30.0, 30.1, 45.0] {
            let advice = suggest(temp, "Clear");
            assert!(!advice.eat.is_empty());
            assert!(!advice.hygiene.is_empty());
        }
    }

    #[test]
    fn rain_appends_umbrella_reminder_case_insensitively() {
        let advice = suggest(20.0, "RAIN");
        assert!(advice.hygiene.ends_with("Don't forget your umbrella!"));
    }

    #[test]
    fn dust_or_smoke_appends_mask_reminder() {
        assert!(suggest(20.0, "Dust").hygiene.ends_with("Wear a mask outdoors."));
        assert!(suggest(20.0, "Smoke").hygiene.ends_with("Wear a mask outdoors."));
    }

    #[test]
    fn at_most_one_append_rain_wins_over_dust() {
        let advice = suggest(20.0, "rain and dust");
        assert!(advice.hygiene.contains("umbrella"));
        assert!(!advice.hygiene.contains("mask"));
    }

    #[test]
    fn clear_mild_weather_appends_nothing() {
        let advice = suggest(20.0, "Clear");
        assert_eq!(advice.hygiene, "Maintain daily hygiene and moisturize regularly.");
    }

    #[test]
    fn hot_rain_gets_hot_band_text_with_umbrella_but_no_alert() {
        // temp=35, condition=Rain: hot band, umbrella appended; no alert
        // fires because the rain clause requires temp < 25 and 35 is not
        // above the 38 heat threshold.
        let advice = suggest(35.0, "Rain");
        assert!(advice.eat.contains("coconut water"));
        assert!(advice.hygiene.starts_with("Use sunscreen"));
        assert!(advice.hygiene.ends_with("Don't forget your umbrella!"));

        assert_eq!(severe_alert("Rain", 35.0), None);
    }

    #[test]
    fn extreme_heat_on_a_clear_day_fires_the_heat_alert() {
        assert_eq!(
            severe_alert("Clear", 40.0),
            Some("High temperature - stay hydrated!")
        );
    }

    #[test]
    fn storm_outranks_every_other_alert() {
        // "thunderstorm" also matching "rain" text elsewhere is irrelevant:
        // the storm clause is checked first.
        assert_eq!(
            severe_alert("Thunderstorm", 20.0),
            Some("Storm alert! Stay indoors.")
        );
        assert_eq!(
            severe_alert("rainstorm", 10.0),
            Some("Storm alert! Stay indoors.")
        );
    }

    #[test]
    fn cool_rain_fires_the_heavy_rain_alert() {
        assert_eq!(
            severe_alert("light rain", 24.9),
            Some("Heavy rain expected - carry an umbrella!")
        );
        // Warm rain does not.
        assert_eq!(severe_alert("light rain", 25.0), None);
    }

    #[test]
    fn snow_heat_and_cold_alerts() {
        assert_eq!(
            severe_alert("Snow", 0.0),
            Some("Snowy conditions - stay warm!")
        );
        assert_eq!(
            severe_alert("Clear", 4.9),
            Some("Very cold weather - dress warmly!")
        );
        assert_eq!(severe_alert("Clear", 5.0), None);
        assert_eq!(severe_alert("Clear", 38.0), None);
    }
}
