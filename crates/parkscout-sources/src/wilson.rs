//! Wilson Parking adapter.
//!
//! `GET /api/v2/GetParkingByLocation` takes the radius in kilometers and a
//! couple of magic parameters (`carParkFeature`, `pageid`) the API refuses to
//! work without.

use parkscout_core::{ParkingFeature, SearchQuery};
use reqwest::Client;
use serde::Deserialize;

use crate::client::decode_response;
use crate::error::SourceError;
use crate::MAX_RESULTS;

/// Id band for this source: features get `300 + index`.
const ID_OFFSET: i64 = 300;

#[derive(Debug, Deserialize)]
struct WilsonResponse {
    #[serde(rename = "carParks", default)]
    car_parks: Vec<WilsonCarpark>,
}

#[derive(Debug, Deserialize)]
struct WilsonCarpark {
    name: Option<String>,
    #[serde(rename = "fromPrice")]
    from_price: Option<String>,
    #[serde(rename = "carParkFeature", default)]
    car_park_features: Vec<String>,
    location: WilsonLocation,
}

#[derive(Debug, Deserialize)]
struct WilsonLocation {
    latitude: f64,
    longitude: f64,
    address: Option<String>,
}

pub(crate) async fn fetch(
    client: &Client,
    base_url: &str,
    query: &SearchQuery,
) -> Result<Vec<ParkingFeature>, SourceError> {
    let url = format!(
        "{}/api/v2/GetParkingByLocation",
        base_url.trim_end_matches('/')
    );
    let response = client
        .get(&url)
        .query(&[
            ("latitude", query.latitude().to_string()),
            ("longitude", query.longitude().to_string()),
            ("carParkFeature", "12".to_string()),
            ("distance", query.distance_km().to_string()),
            ("sort", "distance".to_string()),
            ("pageid", "48908".to_string()),
        ])
        .send()
        .await?;

    let parsed: WilsonResponse = decode_response(response, "Wilson Parking").await?;

    let features = parsed
        .car_parks
        .into_iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, carpark)| map_carpark(index, carpark))
        .collect();

    Ok(features)
}

#[allow(clippy::cast_possible_wrap)]
fn map_carpark(index: usize, carpark: WilsonCarpark) -> ParkingFeature {
    ParkingFeature {
        id: ID_OFFSET + index as i64,
        name: carpark.name,
        // `fromPrice` arrives as a string like "25.00"; an unparsable value
        // degrades to no price rather than failing the adapter.
        price: carpark
            .from_price
            .as_deref()
            .and_then(|price| price.trim().parse::<f64>().ok()),
        features: if carpark.car_park_features.is_empty() {
            None
        } else {
            Some(carpark.car_park_features)
        },
        address: carpark.location.address,
        longitude: carpark.location.longitude,
        latitude: carpark.location.latitude,
        route: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carpark(price: Option<&str>) -> WilsonCarpark {
        WilsonCarpark {
            name: Some("Wilson Queen St".to_string()),
            from_price: price.map(str::to_string),
            car_park_features: vec!["Undercover".to_string()],
            location: WilsonLocation {
                latitude: -27.47,
                longitude: 153.02,
                address: Some("123 Queen St, Brisbane".to_string()),
            },
        }
    }

    #[test]
    fn parses_from_price_string() {
        let mapped = map_carpark(0, carpark(Some("25.50")));
        assert_eq!(mapped.id, 300);
        assert_eq!(mapped.price, Some(25.5));
    }

    #[test]
    fn unparsable_price_degrades_to_none() {
        let mapped = map_carpark(1, carpark(Some("from $25")));
        assert_eq!(mapped.id, 301);
        assert!(mapped.price.is_none());
        assert_eq!(mapped.name.as_deref(), Some("Wilson Queen St"));
    }
}
