//! Per-operation error cooldown.
//!
//! # States
//! - Closed: remote attempts allowed
//! - Cooling: attempts skipped until the cooldown elapses
//!
//! # State Transitions
//! ```text
//! Closed → Cooling: any recorded failure
//! Cooling → Closed: now - last_failure >= cooldown (elapsed time only)
//! ```
//!
//! # Design Decisions
//! - Time-windowed, not counting: one failure opens the breaker
//! - No half-open probing and no success bookkeeping; a success while
//!   Closed has no effect
//! - Records are overwritten, never deleted; stale records are ignored

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Default cooldown after a failed remote attempt.
pub const DEFAULT_ERROR_COOLDOWN: Duration = Duration::from_secs(30);

/// Tracks the last failure time per operation name and gates new attempts.
///
/// An operation name groups reads that share a failure domain (e.g.
/// "CarbonMonoxideLevel"); each name cools down independently.
#[derive(Clone)]
pub struct OperationCircuitBreaker {
    last_failure: Arc<DashMap<String, Instant>>,
    cooldown: Duration,
}

impl OperationCircuitBreaker {
    /// Create a breaker with the given cooldown window.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            last_failure: Arc::new(DashMap::new()),
            cooldown,
        }
    }

    /// Whether a remote attempt for this operation should be skipped.
    ///
    /// True iff a failure was recorded and its cooldown has not elapsed.
    /// Absence of a record means the operation is not cooling down.
    pub fn should_skip(&self, operation: &str) -> bool {
        self.last_failure
            .get(operation)
            .map(|entry| entry.value().elapsed() < self.cooldown)
            .unwrap_or(false)
    }

    /// Record a failure, restarting the cooldown window from now.
    ///
    /// Consecutive failures keep extending the window.
    pub fn record_failure(&self, operation: &str) {
        self.last_failure
            .insert(operation.to_string(), Instant::now());
    }

    /// The configured cooldown window.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

impl Default for OperationCircuitBreaker {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_COOLDOWN)
    }
}
