//! Remote fetch contract and error definitions.
//!
//! # Responsibilities
//! - Define the single async call the bridge makes against the cloud API
//! - Classify fetch failures for logging and surfaced errors
//!
//! # Design Decisions
//! - The fetcher returns the device's full snapshot, not one feature;
//!   the same response shape serves every characteristic
//! - Timeout enforcement belongs to the transport implementation; every
//!   implementation must resolve, never hang
//! - Trait-object seam so tests and hosts can swap transports

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::state::types::FeatureStateRecord;

/// Errors a remote state query can fail with.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure reaching the remote endpoint.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote did not respond within the transport's deadline.
    #[error("remote query timed out after {0} seconds")]
    Timeout(u64),

    /// The remote rejected our credentials or session.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The remote responded with a payload we could not decode.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result type for remote state queries.
pub type FetchResult<T> = Result<T, FetchError>;

/// One asynchronous query against the remote state source.
///
/// Implementations must be `Send + Sync`; the bridge holds them behind
/// `Arc<dyn RemoteStateFetcher>` and may issue concurrent fetches.
pub trait RemoteStateFetcher: Send + Sync {
    /// Query the device's current feature-state snapshot.
    fn fetch(&self) -> BoxFuture<'_, FetchResult<Vec<FeatureStateRecord>>>;
}
