//! Carbon-monoxide characteristic handlers.
//!
//! Two characteristics share one backing range feature: the raw level in
//! ppm and the detected flag derived from it. They cool down
//! independently, so a failing level read does not gate detection reads.

use crate::features::range::RangeFeature;
use crate::features::{mapper, RANGE_FEATURE};
use crate::resilience::read::{CommunicationError, ReadOrchestrator};
use crate::state::types::FeatureKey;

/// Operation name for level reads.
pub const LEVEL_OPERATION: &str = "CarbonMonoxideLevel";

/// Operation name for detected reads.
pub const DETECTED_OPERATION: &str = "CarbonMonoxideDetected";

/// Serves the carbon-monoxide level and detected characteristics.
#[derive(Clone)]
pub struct CarbonMonoxideSensor {
    reader: ReadOrchestrator,
    feature: RangeFeature,
    detected_threshold_ppm: f64,
}

impl CarbonMonoxideSensor {
    pub fn new(
        reader: ReadOrchestrator,
        feature: RangeFeature,
        detected_threshold_ppm: f64,
    ) -> Self {
        Self {
            reader,
            feature,
            detected_threshold_ppm,
        }
    }

    fn key(&self) -> FeatureKey {
        FeatureKey::with_instance(RANGE_FEATURE, self.feature.instance.clone())
    }

    /// Current CO level in ppm. Absent readings default to 0.
    pub async fn level_ppm(&self) -> Result<f64, CommunicationError> {
        let outcome = self
            .reader
            .read(&self.key(), LEVEL_OPERATION, mapper::co_level_ppm)
            .await?;
        Ok(outcome.into_value().unwrap_or_else(|| {
            tracing::debug!(
                range = %self.feature.range_name,
                "CO level absent from snapshot, defaulting to 0"
            );
            0.0
        }))
    }

    /// Whether CO levels are abnormal (host 0/1 contract).
    ///
    /// An absent reading defaults to "not detected".
    pub async fn detected(&self) -> Result<u8, CommunicationError> {
        let outcome = self
            .reader
            .read(
                &self.key(),
                DETECTED_OPERATION,
                mapper::co_detected(self.detected_threshold_ppm),
            )
            .await?;
        Ok(outcome.into_value().unwrap_or(mapper::CO_DETECTED_NORMAL))
    }
}
