//! User-facing message formatting

use chrono::{Local, Timelike};

/// Shown when submit is pressed with an empty (or whitespace-only) input.
pub const EMPTY_INPUT_ERROR: &str = "Please enter a valid location.";

/// Shown for every fetch failure: HTTP error status, transport failure,
/// or a body that does not decode. The underlying error is logged instead.
pub const LOOKUP_FAILED_ERROR: &str = "City not found. Please try again";

/// Temperature advice banded by whole-degree thresholds, evaluated ascending.
/// Celsius only; interpolates the literal numeric value.
pub fn temperature_message(temp_c: f64) -> String {
    if temp_c < 0.0 {
        format!("It's freezing at {temp_c}°C. Bundle up!")
    } else if temp_c < 10.0 {
        format!("It's quite cold at {temp_c}°C. Wear warm clothes.")
    } else if temp_c < 20.0 {
        format!("The temperature is {temp_c}°C. Comfortable for a light jacket.")
    } else if temp_c < 30.0 {
        format!("It's a pleasant {temp_c}°C. Enjoy the nice weather!")
    } else {
        format!("It's hot at {temp_c}°C. Stay hydrated!")
    }
}

/// Case-insensitive lookup against a fixed condition table.
/// Conditions without an entry are echoed verbatim.
pub fn condition_message(condition: &str) -> String {
    match condition.to_lowercase().as_str() {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "Expect some clouds and sunshine.",
        "cloudy" => "It's cloudy today!",
        "overcast" => "The sky is overcast",
        "rain" => "Don't forget your umbrella! It's raining.",
        "thunderstorm" => "Thunderstorms are expected today.",
        "snow" => "Bundle up! It's snowing.",
        "mist" => "It's misty outside.",
        "fog" => "Be careful, there's fog outside.",
        _ => return condition.to_string(),
    }
    .to_string()
}

/// Location line qualified by the wall-clock hour at call time,
/// not at fetch time.
pub fn location_message(location_name: &str) -> String {
    location_message_at(location_name, Local::now().hour())
}

/// Night is [18,24) ∪ [0,6).
pub fn location_message_at(location_name: &str, hour: u32) -> String {
    let is_night = !(6..18).contains(&hour);
    if is_night {
        format!("{location_name} - at Night")
    } else {
        format!("{location_name} - during the Day")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_temperature_bands() {
        let freezing = temperature_message(-5.0);
        assert!(freezing.contains("freezing"));
        assert!(freezing.contains("-5"));

        assert!(temperature_message(0.0).contains("quite cold"));
        assert!(temperature_message(9.9).contains("quite cold"));
        assert!(temperature_message(10.0).contains("light jacket"));
        assert!(temperature_message(19.9).contains("light jacket"));
        assert!(temperature_message(20.0).contains("pleasant"));
        assert!(temperature_message(25.0).contains("pleasant"));

        let hot = temperature_message(35.0);
        assert!(hot.contains("hot"));
        assert!(hot.contains("Stay hydrated"));
        assert!(temperature_message(30.0).contains("hot"));
    }

    #[test]
    fn test_temperature_interpolates_literal_value() {
        assert_eq!(
            temperature_message(25.0),
            "It's a pleasant 25°C. Enjoy the nice weather!"
        );
        assert_eq!(
            temperature_message(25.3),
            "It's a pleasant 25.3°C. Enjoy the nice weather!"
        );
    }

    #[test]
    fn test_condition_lookup_is_case_insensitive() {
        let rain = condition_message("Rain");
        assert_eq!(rain, "Don't forget your umbrella! It's raining.");
        assert_eq!(condition_message("RAIN"), rain);
        assert_eq!(condition_message("rain"), rain);
    }

    #[test]
    fn test_condition_table_entries() {
        assert_eq!(condition_message("Sunny"), "It's a beautiful sunny day!");
        assert_eq!(
            condition_message("Partly cloudy"),
            "Expect some clouds and sunshine."
        );
        assert_eq!(condition_message("Overcast"), "The sky is overcast");
        assert_eq!(condition_message("Fog"), "Be careful, there's fog outside.");
    }

    #[test]
    fn test_unmapped_condition_echoed_verbatim() {
        assert_eq!(condition_message("Hail"), "Hail");
        assert_eq!(
            condition_message("Patchy light drizzle"),
            "Patchy light drizzle"
        );
    }

    #[test]
    fn test_location_day_night_branches() {
        assert_eq!(location_message_at("Kyiv", 20), "Kyiv - at Night");
        assert_eq!(location_message_at("Kyiv", 10), "Kyiv - during the Day");
    }

    #[test]
    fn test_location_day_night_boundaries() {
        assert_eq!(location_message_at("Lima", 0), "Lima - at Night");
        assert_eq!(location_message_at("Lima", 5), "Lima - at Night");
        assert_eq!(location_message_at("Lima", 6), "Lima - during the Day");
        assert_eq!(location_message_at("Lima", 17), "Lima - during the Day");
        assert_eq!(location_message_at("Lima", 18), "Lima - at Night");
        assert_eq!(location_message_at("Lima", 23), "Lima - at Night");
    }
}
