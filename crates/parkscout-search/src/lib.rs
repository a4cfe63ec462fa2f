//! Search aggregation.
//!
//! Fans a [`SearchQuery`] out to every source adapter concurrently, waits for
//! all of them to settle, merges the survivors, enriches each feature with a
//! route, and assembles one GeoJSON collection with a derived bounding box.
//! Individual upstream failures degrade the result; they never abort the
//! search.

use std::collections::HashMap;

use futures::future::join_all;
use parkscout_core::geojson::FeatureCollection;
use parkscout_core::{AppConfig, ParkingFeature, SearchQuery};
use parkscout_routing::{RoutingClient, RoutingError};
use parkscout_sources::{SourceClient, SourceError};
use thiserror::Error;

/// Failures building the service. Searches themselves are infallible — all
/// per-call errors are absorbed into a degraded result.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("source client error: {0}")]
    Source(#[from] SourceError),

    #[error("routing client error: {0}")]
    Routing(#[from] RoutingError),
}

/// Orchestrates the full search pipeline over long-lived provider clients.
pub struct SearchService {
    sources: SourceClient,
    routing: RoutingClient,
}

impl SearchService {
    /// Builds the provider clients from application config.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if either underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SearchError> {
        Ok(Self {
            sources: SourceClient::new(config)?,
            routing: RoutingClient::new(config)?,
        })
    }

    /// Runs one aggregated search.
    ///
    /// 1. All four adapters run concurrently with the same query; the join
    ///    waits for every one to settle.
    /// 2. Failed adapters are logged and discarded, successes flattened.
    ///    Feature identity is carried by id bands, not by position.
    /// 3. Route enrichment fans out per feature with the same settle-all
    ///    policy; a feature whose enrichment fails keeps `route = None`.
    /// 4. The bbox is recomputed from the final coordinates; an empty result
    ///    gets the degenerate box at the query point.
    pub async fn search(&self, query: &SearchQuery) -> FeatureCollection {
        let (meters, disabled, wilson, secure) = tokio::join!(
            self.sources.fetch_parking_meters(query),
            self.sources.fetch_disabled_parking(query),
            self.sources.fetch_wilson_parking(query),
            self.sources.fetch_secure_parking(query),
        );

        let mut features: Vec<ParkingFeature> = Vec::new();
        let settled = [
            ("parking_meters", meters),
            ("disabled_parking", disabled),
            ("wilson_parking", wilson),
            ("secure_parking", secure),
        ];
        for (source, outcome) in settled {
            match outcome {
                Ok(batch) => {
                    tracing::debug!(source, count = batch.len(), "source adapter succeeded");
                    features.extend(batch);
                }
                Err(e) => {
                    tracing::warn!(source, error = %e, "source adapter failed; continuing without it");
                }
            }
        }

        let features = self.enrich_routes(query, features).await;

        FeatureCollection::from_features(features, (query.longitude(), query.latitude()))
    }

    /// One `compute_route` call per feature, settled together. Successes are
    /// joined back by feature id; failures leave the feature route-less.
    async fn enrich_routes(
        &self,
        query: &SearchQuery,
        mut features: Vec<ParkingFeature>,
    ) -> Vec<ParkingFeature> {
        if features.is_empty() {
            return features;
        }

        let origin = (query.latitude(), query.longitude());
        let calls = features.iter().map(|feature| {
            self.routing
                .compute_route(feature.id, origin, (feature.latitude, feature.longitude))
        });

        let mut routes: HashMap<i64, serde_json::Value> = HashMap::new();
        for outcome in join_all(calls).await {
            match outcome {
                Ok(result) => {
                    routes.insert(result.feature_id, result.route);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "route enrichment failed; feature kept without route");
                }
            }
        }

        for feature in &mut features {
            feature.route = routes.remove(&feature.id);
        }
        features
    }
}
