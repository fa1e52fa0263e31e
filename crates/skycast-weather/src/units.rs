//! Temperature unit conversion. Exact conversions; rounding happens only in
//! `display_temperature` so every surface shows the same precision.

use crate::types::TemperatureUnit;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Nearest-integer display value in the requested unit. The single rounding
/// point for presentation, shared by the current card and the forecast strip.
pub fn display_temperature(celsius: f64, unit: TemperatureUnit) -> i64 {
    let value = match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    };
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_points() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < f64::EPSILON);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < f64::EPSILON);
        assert!((celsius_to_fahrenheit(-40.0) - -40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for celsius in [-89.2, -40.0, -17.78, 0.0, 0.1, 21.5, 36.6, 56.7] {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(celsius));
            assert!(
                (back - celsius).abs() < 1e-9,
                "round trip drifted for {}",
                celsius
            );
        }
    }

    #[test]
    fn test_display_rounds_to_nearest() {
        assert_eq!(display_temperature(18.4, TemperatureUnit::Celsius), 18);
        assert_eq!(display_temperature(18.5, TemperatureUnit::Celsius), 19);
        assert_eq!(display_temperature(-0.4, TemperatureUnit::Celsius), 0);
        // 18.3C = 64.94F
        assert_eq!(display_temperature(18.3, TemperatureUnit::Fahrenheit), 65);
    }
}
