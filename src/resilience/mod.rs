//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Characteristic poll:
//!     → read.rs (cache-first, then breaker-gated remote fetch)
//!     → breaker.rs (per-operation cooldown after failures)
//!     → On fetch failure: fallback to last cached value
//! ```
//!
//! # Design Decisions
//! - One failure opens the breaker; elapsed time alone closes it
//! - The read policy is factored once and parameterized per feature,
//!   never duplicated per sensor type
//! - Host polling provides the retry cadence; no internal retries

pub mod breaker;
pub mod read;

pub use breaker::OperationCircuitBreaker;
pub use read::{CommunicationError, ReadOrchestrator, ReadOutcome, ReadResult};
