//! Shared query protocol for the two council ArcGIS feature-service layers.

use parkscout_core::SearchQuery;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::decode_response;
use crate::error::SourceError;
use crate::MAX_RESULTS;

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de>"))]
pub(crate) struct ArcgisFeatureCollection<P> {
    #[serde(default)]
    pub features: Vec<ArcgisFeature<P>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArcgisFeature<P> {
    pub geometry: Option<ArcgisPointGeometry>,
    pub properties: P,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArcgisPointGeometry {
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

/// Runs a point-and-radius query against `{layer_url}/query` in GeoJSON
/// output mode. Distance goes through in meters (`esriSRUnit_Meter`).
pub(crate) async fn query_layer<P: DeserializeOwned>(
    client: &Client,
    layer_url: &str,
    query: &SearchQuery,
    context: &'static str,
) -> Result<ArcgisFeatureCollection<P>, SourceError> {
    let url = format!("{}/query", layer_url.trim_end_matches('/'));
    let response = client
        .get(&url)
        .query(&[
            ("f", "geojson".to_string()),
            ("inSR", "4326".to_string()),
            ("outSR", "4326".to_string()),
            ("outFields", "*".to_string()),
            ("returnGeometry", "true".to_string()),
            ("resultRecordCount", MAX_RESULTS.to_string()),
            ("units", "esriSRUnit_Meter".to_string()),
            ("geometryType", "esriGeometryPoint".to_string()),
            ("distance", query.distance_m().to_string()),
            (
                "geometry",
                format!("{},{}", query.longitude(), query.latitude()),
            ),
        ])
        .send()
        .await?;

    decode_response(response, context).await
}
