use serde::{Deserialize, Serialize};

/// One normalized parking option, source-agnostic.
///
/// Ids carry a per-source offset band (meters 100, disabled 200, Wilson 300,
/// Secure 400) plus the item's index inside the provider response. Provider
/// queries are capped at 30 records, so bands of width 100 cannot collide
/// within a single search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingFeature {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub features: Option<Vec<String>>,
    pub address: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    /// Opaque provider route payload. `None` until enrichment, and left
    /// `None` when enrichment for this feature fails.
    pub route: Option<serde_json::Value>,
}

/// A computed route, keyed to the destination feature it was requested for.
#[derive(Debug, Clone)]
pub struct RouteResult {
    pub feature_id: i64,
    pub route: serde_json::Value,
}
