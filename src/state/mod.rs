//! Feature-state subsystem.
//!
//! # Data Flow
//! ```text
//! Remote feed snapshot:
//!     → types.rs (FeatureStateRecord, RemoteValue)
//!     → cache.rs (last observed value per FeatureKey)
//!
//! Consumers:
//!     → resilience::read (cache-first and fallback lookups)
//!     → features (domain mapping of raw values)
//! ```
//!
//! # Design Decisions
//! - Cache holds raw remote values; domain mapping happens at read time
//! - One entry per key; a new reading replaces, never appends
//! - No expiry: staleness policy belongs to the reader, not the store

pub mod cache;
pub mod types;

pub use cache::FeatureStateCache;
pub use types::{FeatureKey, FeatureStateRecord, RemoteValue, TemperatureScale};
