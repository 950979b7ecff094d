//! Last-observed feature value cache.
//!
//! # Responsibilities
//! - O(1) lookup of the most recent raw value per feature key
//! - Unconditional overwrite on every fresh read
//!
//! # Design Decisions
//! - A miss is a normal outcome, not an error
//! - No proactive expiry; readers decide whether to prefer fresh data
//! - Process-lifetime only, no persistence

use dashmap::DashMap;
use std::sync::Arc;

use crate::state::types::{FeatureKey, RemoteValue};

/// Thread-safe store of the most recently observed value per feature key.
#[derive(Clone, Default)]
pub struct FeatureStateCache {
    inner: Arc<DashMap<FeatureKey, RemoteValue>>,
}

impl FeatureStateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent reading for the key, if any. No side effects.
    pub fn get(&self, key: &FeatureKey) -> Option<RemoteValue> {
        self.inner.get(key).map(|entry| entry.value().clone())
    }

    /// Record a reading, replacing any previous value for the key.
    pub fn put(&self, key: FeatureKey, value: RemoteValue) {
        self.inner.insert(key, value);
    }

    /// Number of keys currently cached.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
