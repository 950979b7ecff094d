//! Current-temperature characteristic handler.

use crate::features::{mapper, TEMPERATURE_FEATURE};
use crate::resilience::read::ReadOrchestrator;
use crate::state::types::FeatureKey;

/// Operation name grouping temperature reads for the breaker.
pub const OPERATION: &str = "CurrentTemperature";

/// Serves the current-temperature characteristic.
///
/// Unlike the other sensors, temperature never surfaces an error: the
/// characteristic must always produce a number, so total failure falls
/// back to a configured sentinel.
#[derive(Clone)]
pub struct TemperatureSensor {
    reader: ReadOrchestrator,
    sentinel_celsius: f64,
}

impl TemperatureSensor {
    pub fn new(reader: ReadOrchestrator, sentinel_celsius: f64) -> Self {
        Self {
            reader,
            sentinel_celsius,
        }
    }

    /// Current temperature in degrees Celsius.
    pub async fn current_temperature(&self) -> f64 {
        let key = FeatureKey::new(TEMPERATURE_FEATURE);
        match self
            .reader
            .read(&key, OPERATION, mapper::temperature_to_celsius)
            .await
        {
            Ok(outcome) => match outcome.into_value() {
                Some(celsius) => celsius,
                None => {
                    tracing::debug!(
                        sentinel = self.sentinel_celsius,
                        "temperature absent from snapshot, returning sentinel"
                    );
                    self.sentinel_celsius
                }
            },
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    sentinel = self.sentinel_celsius,
                    "temperature unavailable, returning sentinel"
                );
                self.sentinel_celsius
            }
        }
    }
}
