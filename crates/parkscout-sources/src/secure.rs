//! Secure Parking adapter.
//!
//! The search proxy is a booking API: it wants an entry/exit window even for
//! a plain availability search, so one is synthesized from the current time.

use chrono::{Duration, Utc};
use parkscout_core::{ParkingFeature, SearchQuery};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::decode_response;
use crate::error::SourceError;
use crate::MAX_RESULTS;

/// Id band for this source: features get `400 + index`.
const ID_OFFSET: i64 = 400;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SecureSearchRequest {
    categories: Vec<&'static str>,
    entry_date_time: String,
    exit_date_time: String,
    latitude: f64,
    longitude: f64,
    limit: usize,
    max_distance: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SecureCarpark {
    name: Option<String>,
    address: Option<SecureAddress>,
    latitude: f64,
    longitude: f64,
    price: Option<f64>,
    #[serde(default)]
    features: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SecureAddress {
    street: Option<String>,
    suburb: Option<String>,
    post_code: Option<String>,
    state: Option<String>,
}

pub(crate) async fn fetch(
    client: &Client,
    base_url: &str,
    query: &SearchQuery,
) -> Result<Vec<ParkingFeature>, SourceError> {
    let entry = Utc::now();
    let exit = entry + Duration::hours(23);
    let request = SecureSearchRequest {
        categories: vec!["allday", "hourly", "night"],
        entry_date_time: entry.to_rfc3339(),
        exit_date_time: exit.to_rfc3339(),
        latitude: query.latitude(),
        longitude: query.longitude(),
        limit: MAX_RESULTS,
        max_distance: query.distance_m(),
    };

    let url = format!("{}/search/carparks", base_url.trim_end_matches('/'));
    let response = client.post(&url).json(&request).send().await?;

    // The response is a bare JSON array of carparks, no envelope.
    let carparks: Vec<SecureCarpark> = decode_response(response, "Secure Parking").await?;

    let features = carparks
        .into_iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, carpark)| map_carpark(index, carpark))
        .collect();

    Ok(features)
}

#[allow(clippy::cast_possible_wrap)]
fn map_carpark(index: usize, carpark: SecureCarpark) -> ParkingFeature {
    ParkingFeature {
        id: ID_OFFSET + index as i64,
        name: carpark.name,
        price: carpark.price,
        features: if carpark.features.is_empty() {
            None
        } else {
            Some(carpark.features)
        },
        address: carpark.address.as_ref().map(format_address),
        longitude: carpark.longitude,
        latitude: carpark.latitude,
        route: None,
    }
}

fn format_address(address: &SecureAddress) -> String {
    [
        address.street.as_deref(),
        address.suburb.as_deref(),
        address.state.as_deref(),
        address.post_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}
