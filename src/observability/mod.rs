//! Observability subsystem.
//!
//! Logging only: every subsystem emits structured `tracing` events and
//! this module wires up the subscriber. The bridge has no metrics or
//! distributed-tracing surface; logs carry the feature key, operation
//! name, and error cause on every interesting transition.

pub mod logging;
