//! Remote state source seam.
//!
//! The transport that actually talks to the cloud API lives behind the
//! [`RemoteStateFetcher`] trait; this crate only sees a single async call
//! that yields a full feature-state snapshot or a [`FetchError`].

pub mod fetcher;
pub mod projection;

pub use fetcher::{FetchError, FetchResult, RemoteStateFetcher};
pub use projection::find_record;
