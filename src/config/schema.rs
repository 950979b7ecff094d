//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config
//! files; every field has a default so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the sensor bridge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Resilience settings (breaker cooldown).
    pub resilience: ResilienceConfig,

    /// Per-sensor policy settings.
    pub sensors: SensorConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Resilience settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResilienceConfig {
    /// Cooldown after a failed remote attempt, in seconds.
    pub error_cooldown_secs: u64,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            error_cooldown_secs: 30,
        }
    }
}

/// Per-sensor policy settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SensorConfig {
    /// CO level at or above which the detected flag reports abnormal (ppm).
    pub co_detected_threshold_ppm: f64,

    /// Temperature reported when no value can be obtained (°C).
    pub temperature_sentinel_celsius: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            co_detected_threshold_ppm: 30.0,
            temperature_sentinel_celsius: 0.0,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter when RUST_LOG is unset (e.g. "info").
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.resilience.error_cooldown_secs, 30);
        assert_eq!(config.sensors.co_detected_threshold_ppm, 30.0);
        assert_eq!(config.sensors.temperature_sentinel_celsius, 0.0);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: BridgeConfig = toml::from_str("").unwrap();
        assert_eq!(config.resilience.error_cooldown_secs, 30);
    }

    #[test]
    fn test_partial_override() {
        let config: BridgeConfig = toml::from_str(
            r#"
            [resilience]
            error_cooldown_secs = 60

            [sensors]
            co_detected_threshold_ppm = 50.0
            "#,
        )
        .unwrap();
        assert_eq!(config.resilience.error_cooldown_secs, 60);
        assert_eq!(config.sensors.co_detected_threshold_ppm, 50.0);
        // Untouched sections keep their defaults.
        assert_eq!(config.sensors.temperature_sentinel_celsius, 0.0);
    }
}
