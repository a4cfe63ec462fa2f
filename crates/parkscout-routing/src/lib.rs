//! Route enrichment client.
//!
//! Wraps a Google-Routes-style `computeRoutes` endpoint: given an origin and
//! a destination it asks for the single best driving route and returns the
//! provider's route payload opaquely. Every call is independent — the
//! aggregator fans these out per feature and absorbs individual failures.

mod client;
mod error;
mod types;

pub use client::RoutingClient;
pub use error::RoutingError;
pub use types::Waypoint;
