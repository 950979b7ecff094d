//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (cooldown > 0, threshold >= 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the parsed config

use std::fmt;

use crate::config::schema::BridgeConfig;

/// One semantic problem found in a parsed config.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The breaker cooldown must be a positive number of seconds.
    ZeroCooldown,

    /// The CO detection threshold must be a finite, non-negative level.
    InvalidCoThreshold(f64),

    /// The temperature sentinel must be a finite number.
    InvalidTemperatureSentinel(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroCooldown => {
                write!(f, "resilience.error_cooldown_secs must be greater than 0")
            }
            ValidationError::InvalidCoThreshold(v) => {
                write!(f, "sensors.co_detected_threshold_ppm is invalid: {}", v)
            }
            ValidationError::InvalidTemperatureSentinel(v) => {
                write!(f, "sensors.temperature_sentinel_celsius is invalid: {}", v)
            }
        }
    }
}

/// Check a parsed config for semantic problems.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.resilience.error_cooldown_secs == 0 {
        errors.push(ValidationError::ZeroCooldown);
    }

    let threshold = config.sensors.co_detected_threshold_ppm;
    if !threshold.is_finite() || threshold < 0.0 {
        errors.push(ValidationError::InvalidCoThreshold(threshold));
    }

    let sentinel = config.sensors.temperature_sentinel_celsius;
    if !sentinel.is_finite() {
        errors.push(ValidationError::InvalidTemperatureSentinel(sentinel));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&BridgeConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = BridgeConfig::default();
        config.resilience.error_cooldown_secs = 0;
        config.sensors.co_detected_threshold_ppm = -1.0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::ZeroCooldown));
    }

    #[test]
    fn test_nan_sentinel_rejected() {
        let mut config = BridgeConfig::default();
        config.sensors.temperature_sentinel_celsius = f64::NAN;
        assert!(validate_config(&config).is_err());
    }
}
