//! Parking-data source adapters.
//!
//! One adapter per upstream provider (two municipal ArcGIS layers, Wilson
//! Parking, Secure Parking), each translating that provider's schema into
//! [`parkscout_core::ParkingFeature`]. Adapters are independent: a transport
//! or parse failure in one is returned as that adapter's `Err` and never
//! affects siblings — the aggregator decides what to do with it.

mod arcgis;
mod client;
mod disabled;
mod error;
mod meters;
mod secure;
mod wilson;

pub use client::SourceClient;
pub use error::SourceError;

/// Cap applied to every provider query. Keeps each source inside its id
/// band: ids are `band_offset + index` and bands are 100 wide.
pub(crate) const MAX_RESULTS: usize = 30;
