//! Relative-humidity characteristic handler.

use crate::features::range::RangeFeature;
use crate::features::{mapper, RANGE_FEATURE};
use crate::resilience::read::{CommunicationError, ReadOrchestrator};
use crate::state::types::FeatureKey;

/// Operation name grouping humidity reads for the breaker.
pub const OPERATION: &str = "Humidity";

/// Serves the current-relative-humidity characteristic.
#[derive(Clone)]
pub struct HumiditySensor {
    reader: ReadOrchestrator,
    feature: RangeFeature,
}

impl HumiditySensor {
    pub fn new(reader: ReadOrchestrator, feature: RangeFeature) -> Self {
        Self { reader, feature }
    }

    /// Current relative humidity in percent.
    ///
    /// An absent reading defaults to 0; a communication failure surfaces
    /// so the host can mark the characteristic unavailable.
    pub async fn relative_humidity(&self) -> Result<f64, CommunicationError> {
        let key = FeatureKey::with_instance(RANGE_FEATURE, self.feature.instance.clone());
        let outcome = self
            .reader
            .read(&key, OPERATION, mapper::relative_humidity)
            .await?;
        Ok(outcome.into_value().unwrap_or_else(|| {
            tracing::debug!(
                range = %self.feature.range_name,
                "humidity absent from snapshot, defaulting to 0"
            );
            0.0
        }))
    }
}
