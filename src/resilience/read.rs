//! Resilient read orchestration.
//!
//! # Responsibilities
//! - Serve characteristic polls from cache when a usable value is known
//! - Gate remote attempts behind the per-operation cooldown
//! - Write fresh values through to the cache
//! - Answer with stale cached data when the remote fails
//!
//! # Read Algorithm
//! ```text
//! read(key, operation, map):
//!     cache hit and map accepts      → Cached (no remote call)
//!     breaker cooling down           → Err(CoolingDown)
//!     fetch ok, record found, mapped → cache write-through, Fresh
//!     fetch ok, no record / rejected → Absent (caller's default policy)
//!     fetch failed, cache present    → record failure, Stale
//!     fetch failed, no cache         → record failure, Err(Remote)
//! ```
//!
//! # Design Decisions
//! - One orchestrator serves every feature; the key, operation name, and
//!   mapping are the only per-feature inputs
//! - A pipeline miss never feeds the breaker; only transport failures do
//! - The orchestrator never invents default values; that is caller policy

use std::sync::Arc;
use thiserror::Error;

use crate::remote::fetcher::{FetchError, RemoteStateFetcher};
use crate::remote::projection::find_record;
use crate::resilience::breaker::OperationCircuitBreaker;
use crate::state::cache::FeatureStateCache;
use crate::state::types::{FeatureKey, RemoteValue};

/// How a successful read obtained its value.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<T> {
    /// Served from cache; no remote call was made.
    Cached(T),

    /// Obtained from a fresh remote fetch.
    Fresh(T),

    /// Remote fetch failed; the last cached value was used instead.
    Stale(T),

    /// The fetch succeeded but the snapshot had no usable value for the
    /// key. Callers apply their own default policy.
    Absent,
}

impl<T> ReadOutcome<T> {
    /// The carried value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            ReadOutcome::Cached(value)
            | ReadOutcome::Fresh(value)
            | ReadOutcome::Stale(value) => Some(value),
            ReadOutcome::Absent => None,
        }
    }

    /// Whether this outcome was answered without a remote round trip.
    pub fn is_cached(&self) -> bool {
        matches!(self, ReadOutcome::Cached(_))
    }
}

/// The only error surfaced to host-facing getters: no value obtainable.
#[derive(Debug, Error)]
pub enum CommunicationError {
    /// Skipped: the operation is cooling down from a recent failure and
    /// no cached fallback exists.
    #[error("operation {operation} is cooling down after a recent failure")]
    CoolingDown { operation: String },

    /// The remote fetch failed and no cached fallback exists.
    #[error("remote state unavailable")]
    Remote {
        #[source]
        source: FetchError,
    },
}

/// Result type for orchestrated reads.
pub type ReadResult<T> = Result<ReadOutcome<T>, CommunicationError>;

/// Composes the cache, breaker, and fetcher into the shared read policy.
///
/// One instance per device; cache and breaker state are owned here and
/// shared by every characteristic handler via `Clone`.
#[derive(Clone)]
pub struct ReadOrchestrator {
    cache: FeatureStateCache,
    breaker: OperationCircuitBreaker,
    fetcher: Arc<dyn RemoteStateFetcher>,
}

impl ReadOrchestrator {
    /// Create an orchestrator over the given fetcher.
    pub fn new(breaker: OperationCircuitBreaker, fetcher: Arc<dyn RemoteStateFetcher>) -> Self {
        Self::with_cache(FeatureStateCache::new(), breaker, fetcher)
    }

    /// Create an orchestrator sharing an existing cache.
    pub fn with_cache(
        cache: FeatureStateCache,
        breaker: OperationCircuitBreaker,
        fetcher: Arc<dyn RemoteStateFetcher>,
    ) -> Self {
        Self {
            cache,
            breaker,
            fetcher,
        }
    }

    /// The cache this orchestrator reads through and writes back to.
    pub fn cache(&self) -> &FeatureStateCache {
        &self.cache
    }

    /// The breaker gating this orchestrator's remote attempts.
    pub fn breaker(&self) -> &OperationCircuitBreaker {
        &self.breaker
    }

    /// Read one feature value under the resilient policy.
    ///
    /// `map` converts a raw remote value into the caller's domain type,
    /// returning `None` for shapes it does not accept. It is applied
    /// identically to cached and fresh values.
    pub async fn read<T, F>(&self, key: &FeatureKey, operation: &str, map: F) -> ReadResult<T>
    where
        F: Fn(&RemoteValue) -> Option<T>,
    {
        // Step 1: cache-first. A prior read beats a new network call.
        if let Some(raw) = self.cache.get(key) {
            if let Some(value) = map(&raw) {
                tracing::debug!(key = %key, operation, "serving cached value");
                return Ok(ReadOutcome::Cached(value));
            }
        }

        // Step 2: breaker. At most one remote attempt per cooldown window.
        if self.breaker.should_skip(operation) {
            tracing::debug!(operation, "skipping remote call during cooldown");
            return Err(CommunicationError::CoolingDown {
                operation: operation.to_string(),
            });
        }

        // Step 3: fetch and project.
        match self.fetcher.fetch().await {
            Ok(records) => match find_record(&records, key) {
                Some(record) => match map(&record.value) {
                    Some(value) => {
                        self.cache.put(key.clone(), record.value.clone());
                        tracing::debug!(key = %key, operation, "fresh value cached");
                        Ok(ReadOutcome::Fresh(value))
                    }
                    None => {
                        tracing::debug!(key = %key, operation, "record shape rejected by mapping");
                        Ok(ReadOutcome::Absent)
                    }
                },
                None => {
                    tracing::debug!(key = %key, operation, "feature absent from snapshot");
                    Ok(ReadOutcome::Absent)
                }
            },
            Err(err) => {
                self.breaker.record_failure(operation);

                if let Some(raw) = self.cache.get(key) {
                    if let Some(value) = map(&raw) {
                        tracing::warn!(
                            key = %key,
                            operation,
                            error = %err,
                            "remote state unavailable, using cached fallback"
                        );
                        return Ok(ReadOutcome::Stale(value));
                    }
                }

                tracing::error!(
                    key = %key,
                    operation,
                    error = %err,
                    "remote state unavailable and no cached fallback"
                );
                Err(CommunicationError::Remote { source: err })
            }
        }
    }
}
