//! Pure mappings from raw remote values to domain units.
//!
//! Each mapping returns `None` for shapes it does not accept; absence is
//! handled by the read policy, never raised as an error here.

use crate::state::types::{RemoteValue, TemperatureScale};

/// Host contract for carbon monoxide detection: levels normal.
pub const CO_DETECTED_NORMAL: u8 = 0;

/// Host contract for carbon monoxide detection: abnormal levels.
pub const CO_DETECTED_ABNORMAL: u8 = 1;

/// Map a scaled temperature reading to degrees Celsius.
pub fn temperature_to_celsius(value: &RemoteValue) -> Option<f64> {
    match value {
        RemoteValue::Temperature {
            value,
            scale: TemperatureScale::Celsius,
        } => Some(*value),
        RemoteValue::Temperature {
            value,
            scale: TemperatureScale::Fahrenheit,
        } => Some((value - 32.0) * 5.0 / 9.0),
        _ => None,
    }
}

/// Map a numeric range reading to relative humidity (0–100 %).
pub fn relative_humidity(value: &RemoteValue) -> Option<f64> {
    match value {
        RemoteValue::Number(n) => Some(n.clamp(0.0, 100.0)),
        _ => None,
    }
}

/// Map a numeric range reading to a CO level in ppm.
pub fn co_level_ppm(value: &RemoteValue) -> Option<f64> {
    match value {
        RemoteValue::Number(n) => Some(n.max(0.0)),
        _ => None,
    }
}

/// Mapping from a CO level to the host's detected/not-detected contract.
pub fn co_detected(threshold_ppm: f64) -> impl Fn(&RemoteValue) -> Option<u8> {
    move |value| {
        co_level_ppm(value).map(|level| {
            if level >= threshold_ppm {
                CO_DETECTED_ABNORMAL
            } else {
                CO_DETECTED_NORMAL
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_passes_through() {
        let value = RemoteValue::Temperature {
            value: 21.5,
            scale: TemperatureScale::Celsius,
        };
        assert_eq!(temperature_to_celsius(&value), Some(21.5));
    }

    #[test]
    fn test_fahrenheit_converts() {
        let value = RemoteValue::Temperature {
            value: 72.0,
            scale: TemperatureScale::Fahrenheit,
        };
        let celsius = temperature_to_celsius(&value).unwrap();
        assert!((celsius - 22.222).abs() < 0.001);

        let freezing = RemoteValue::Temperature {
            value: 32.0,
            scale: TemperatureScale::Fahrenheit,
        };
        assert_eq!(temperature_to_celsius(&freezing), Some(0.0));
    }

    #[test]
    fn test_temperature_rejects_plain_number() {
        assert_eq!(temperature_to_celsius(&RemoteValue::Number(21.0)), None);
    }

    #[test]
    fn test_humidity_clamps() {
        assert_eq!(relative_humidity(&RemoteValue::Number(55.0)), Some(55.0));
        assert_eq!(relative_humidity(&RemoteValue::Number(120.0)), Some(100.0));
        assert_eq!(relative_humidity(&RemoteValue::Number(-3.0)), Some(0.0));
        assert_eq!(relative_humidity(&RemoteValue::Text("LOW".into())), None);
    }

    #[test]
    fn test_co_level_floors_at_zero() {
        assert_eq!(co_level_ppm(&RemoteValue::Number(12.5)), Some(12.5));
        assert_eq!(co_level_ppm(&RemoteValue::Number(-1.0)), Some(0.0));
    }

    #[test]
    fn test_co_detected_threshold_edges() {
        let detect = co_detected(30.0);
        assert_eq!(detect(&RemoteValue::Number(29.9)), Some(CO_DETECTED_NORMAL));
        assert_eq!(detect(&RemoteValue::Number(30.0)), Some(CO_DETECTED_ABNORMAL));
        assert_eq!(detect(&RemoteValue::Number(75.0)), Some(CO_DETECTED_ABNORMAL));
        assert_eq!(detect(&RemoteValue::Text("NORMAL".into())), None);
    }
}
