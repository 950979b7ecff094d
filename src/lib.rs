//! Resilient sensor-state bridge.
//!
//! Exposes sensor state from a flaky, rate-limited remote cloud API as
//! local device characteristics while shielding callers from remote
//! latency and outages.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                SENSOR BRIDGE                 │
//!                    │                                              │
//!  Characteristic    │  ┌──────────┐     ┌────────────────────────┐ │
//!  poll ─────────────┼─▶│ features │────▶│ resilience::read       │ │
//!                    │  │ handlers │     │ (shared read policy)   │ │
//!                    │  └──────────┘     └───┬────────┬───────┬───┘ │
//!                    │                       │        │       │     │
//!                    │                       ▼        ▼       ▼     │
//!                    │                  ┌───────┐ ┌───────┐ ┌─────┐ │
//!  Value or          │                  │ state │ │breaker│ │fetch│◀┼── Remote
//!  unavailable ◀─────┼──────────────────│ cache │ │       │ │seam │ │   cloud API
//!                    │                  └───────┘ └───────┘ └─────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Every characteristic poll runs the same policy: answer from cache if a
//! usable value is known, skip the remote while its operation cools down
//! from a recent failure, otherwise fetch once, write through, and fall
//! back to stale data when the remote fails.

// Core subsystems
pub mod remote;
pub mod resilience;
pub mod state;

// Device assembly and sensor handlers
pub mod bridge;
pub mod features;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use bridge::SensorBridge;
pub use config::schema::BridgeConfig;
pub use remote::fetcher::{FetchError, FetchResult, RemoteStateFetcher};
pub use resilience::breaker::OperationCircuitBreaker;
pub use resilience::read::{CommunicationError, ReadOrchestrator, ReadOutcome, ReadResult};
pub use state::cache::FeatureStateCache;
pub use state::types::{FeatureKey, FeatureStateRecord, RemoteValue, TemperatureScale};
