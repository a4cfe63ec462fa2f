//! Council disability-permit parking adapter (ArcGIS layer).
//!
//! Unlike the meters layer, the coordinates worth trusting here live in the
//! `LATITUDE`/`LONGITUDE` attributes rather than the feature geometry.

use parkscout_core::{ParkingFeature, SearchQuery};
use reqwest::Client;
use serde::Deserialize;

use crate::arcgis::query_layer;
use crate::error::SourceError;
use crate::MAX_RESULTS;

/// Id band for this source: features get `200 + index`.
const ID_OFFSET: i64 = 200;

#[derive(Debug, Deserialize)]
struct DisabledProperties {
    #[serde(rename = "STREET")]
    street: Option<String>,
    #[serde(rename = "BAYS")]
    bays: Option<i64>,
    #[serde(rename = "LATITUDE")]
    latitude: Option<f64>,
    #[serde(rename = "LONGITUDE")]
    longitude: Option<f64>,
}

#[allow(clippy::cast_possible_wrap)]
pub(crate) async fn fetch(
    client: &Client,
    layer_url: &str,
    query: &SearchQuery,
) -> Result<Vec<ParkingFeature>, SourceError> {
    let collection =
        query_layer::<DisabledProperties>(client, layer_url, query, "disabled parking").await?;

    let features = collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let latitude = feature.properties.latitude?;
            let longitude = feature.properties.longitude?;
            Some((longitude, latitude, feature.properties))
        })
        // Cap again client-side; the id band is only 100 wide and the layer
        // is not obliged to honor `resultRecordCount`.
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, (longitude, latitude, properties))| {
            ParkingFeature {
                id: ID_OFFSET + index as i64,
                name: properties.street.clone(),
                price: None,
                features: properties.bays.map(|bays| vec![format!("Bays: {bays}")]),
                address: properties.street,
                longitude,
                latitude,
                route: None,
            }
        })
        .collect();

    Ok(features)
}
