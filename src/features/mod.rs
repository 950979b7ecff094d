//! Per-sensor characteristic handlers.
//!
//! # Data Flow
//! ```text
//! Host characteristic poll (zero-argument getter):
//!     → handler (temperature / humidity / carbon_monoxide)
//!     → resilience::ReadOrchestrator (shared read policy)
//!     → mapper (raw remote value → domain unit)
//!     → value, per-feature default, or service-unavailable error
//! ```
//!
//! # Design Decisions
//! - Handlers hold no control flow beyond default policy; the read
//!   algorithm lives once in the resilience subsystem
//! - Default policy on an absent value is per feature: temperature and
//!   humidity fall back to a number, CO reports "not detected"
//! - Temperature alone also swallows communication errors into its
//!   sentinel; HomeKit's temperature characteristic must always produce
//!   a number

pub mod carbon_monoxide;
pub mod humidity;
pub mod mapper;
pub mod range;
pub mod temperature;

pub use carbon_monoxide::CarbonMonoxideSensor;
pub use humidity::HumiditySensor;
pub use range::{select_range_feature, RangeFeature};
pub use temperature::TemperatureSensor;

/// Feature name the remote feed uses for range-backed sensors.
pub const RANGE_FEATURE: &str = "range";

/// Feature name the remote feed uses for the temperature sensor.
pub const TEMPERATURE_FEATURE: &str = "temperatureSensor";
