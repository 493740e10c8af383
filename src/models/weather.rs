//! Current-conditions reading and display methods

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::weather::codes::weather_code_to_description;

/// Format a value with one fractional digit, rounding half-up on its shortest
/// decimal form (`20.15` -> `"20.2"`, `-7.25` -> `"-7.3"`).
///
/// Values a `Decimal` cannot hold fall back to the float formatter.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(1);
            rounded.to_string()
        }
        Err(_) => format!("{value:.1}"),
    }
}

/// Current weather conditions for a place, as delivered by a provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent ("feels like") temperature in Celsius
    pub apparent_temperature: f64,
    /// Relative humidity in percent
    pub relative_humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// WMO weather interpretation code
    pub weather_code: u8,
}

impl WeatherReading {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", format_one_decimal(self.temperature))
    }

    /// Format apparent temperature with unit
    #[must_use]
    pub fn format_apparent_temperature(&self) -> String {
        format!("{}°C", format_one_decimal(self.apparent_temperature))
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{}m/s", format_one_decimal(self.wind_speed))
    }

    /// Korean description of the weather code
    #[must_use]
    pub fn description(&self) -> &'static str {
        weather_code_to_description(self.weather_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_formatting_uses_one_decimal() {
        let reading = WeatherReading {
            temperature: 20.5,
            apparent_temperature: 19.0,
            relative_humidity: 65,
            wind_speed: 5.66,
            weather_code: 0,
        };
        assert_eq!(reading.format_temperature(), "20.5°C");
        assert_eq!(reading.format_apparent_temperature(), "19.0°C");
        assert_eq!(reading.format_wind(), "5.7m/s");
        assert_eq!(reading.description(), "맑음");
    }

    #[rstest]
    #[case(20.15, "20.2")]
    #[case(7.25, "7.3")]
    #[case(0.05, "0.1")]
    #[case(-7.25, "-7.3")]
    #[case(20.14, "20.1")]
    #[case(19.0, "19.0")]
    #[case(3.0e-7, "0.0")]
    fn test_one_decimal_rounds_half_up(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_one_decimal(value), expected);
    }

    #[test]
    fn test_one_decimal_non_finite_falls_back() {
        assert_eq!(format_one_decimal(f64::NAN), "NaN");
        assert_eq!(format_one_decimal(f64::INFINITY), "inf");
    }

    #[test]
    fn test_wind_tie_rounds_up() {
        let reading = WeatherReading {
            temperature: 20.15,
            apparent_temperature: 18.25,
            relative_humidity: 70,
            wind_speed: 7.25,
            weather_code: 3,
        };
        assert_eq!(reading.format_temperature(), "20.2°C");
        assert_eq!(reading.format_apparent_temperature(), "18.3°C");
        assert_eq!(reading.format_wind(), "7.3m/s");
    }
}
