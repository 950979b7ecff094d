//! Device-level assembly.
//!
//! Wires one device's configuration and remote fetcher into the shared
//! read orchestrator, then hands out characteristic handlers that all
//! observe the same cache and breaker state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::schema::BridgeConfig;
use crate::features::carbon_monoxide::CarbonMonoxideSensor;
use crate::features::humidity::HumiditySensor;
use crate::features::range::RangeFeature;
use crate::features::temperature::TemperatureSensor;
use crate::remote::fetcher::RemoteStateFetcher;
use crate::resilience::breaker::OperationCircuitBreaker;
use crate::resilience::read::ReadOrchestrator;

/// One device's resilient view of the remote state feed.
///
/// Cache and breaker state live for the life of this value and are not
/// shared across devices.
#[derive(Clone)]
pub struct SensorBridge {
    reader: ReadOrchestrator,
    config: BridgeConfig,
}

impl SensorBridge {
    /// Assemble a bridge for one device.
    pub fn new(config: BridgeConfig, fetcher: Arc<dyn RemoteStateFetcher>) -> Self {
        let cooldown = Duration::from_secs(config.resilience.error_cooldown_secs);
        let reader = ReadOrchestrator::new(OperationCircuitBreaker::new(cooldown), fetcher);
        Self { reader, config }
    }

    /// The shared read orchestrator, for hosts binding custom features.
    pub fn reader(&self) -> &ReadOrchestrator {
        &self.reader
    }

    /// Handler for the current-temperature characteristic.
    pub fn temperature_sensor(&self) -> TemperatureSensor {
        TemperatureSensor::new(
            self.reader.clone(),
            self.config.sensors.temperature_sentinel_celsius,
        )
    }

    /// Handler for the relative-humidity characteristic.
    pub fn humidity_sensor(&self, feature: RangeFeature) -> HumiditySensor {
        HumiditySensor::new(self.reader.clone(), feature)
    }

    /// Handlers for the carbon-monoxide characteristics.
    pub fn carbon_monoxide_sensor(&self, feature: RangeFeature) -> CarbonMonoxideSensor {
        CarbonMonoxideSensor::new(
            self.reader.clone(),
            feature,
            self.config.sensors.co_detected_threshold_ppm,
        )
    }
}
