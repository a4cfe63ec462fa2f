//! Council parking-meter adapter (ArcGIS `parking_meters` layer).

use parkscout_core::{ParkingFeature, SearchQuery};
use reqwest::Client;
use serde::Deserialize;

use crate::arcgis::{query_layer, ArcgisFeature};
use crate::error::SourceError;
use crate::MAX_RESULTS;

/// Id band for this source: features get `100 + index`.
const ID_OFFSET: i64 = 100;

#[derive(Debug, Deserialize)]
struct MeterProperties {
    #[serde(rename = "METER_NO")]
    meter_no: Option<String>,
    #[serde(rename = "CATEGORY")]
    category: Option<String>,
    #[serde(rename = "STREET")]
    street: Option<String>,
    #[serde(rename = "SUBURB")]
    suburb: Option<String>,
}

pub(crate) async fn fetch(
    client: &Client,
    layer_url: &str,
    query: &SearchQuery,
) -> Result<Vec<ParkingFeature>, SourceError> {
    let collection =
        query_layer::<MeterProperties>(client, layer_url, query, "parking meters").await?;

    let features = collection
        .features
        .into_iter()
        .filter_map(|feature| {
            // Meters without geometry cannot be placed on the map.
            let coordinates = feature.geometry.as_ref()?.coordinates;
            Some((coordinates, feature))
        })
        // Cap again client-side; the id band is only 100 wide and the layer
        // is not obliged to honor `resultRecordCount`.
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, (coordinates, feature))| map_feature(index, coordinates, &feature))
        .collect();

    Ok(features)
}

#[allow(clippy::cast_possible_wrap)]
fn map_feature(
    index: usize,
    coordinates: [f64; 2],
    feature: &ArcgisFeature<MeterProperties>,
) -> ParkingFeature {
    let properties = &feature.properties;
    let address = match (&properties.street, &properties.suburb) {
        (Some(street), Some(suburb)) => Some(format!("{street}, {suburb}")),
        (Some(street), None) => Some(street.clone()),
        (None, Some(suburb)) => Some(suburb.clone()),
        (None, None) => None,
    };

    ParkingFeature {
        id: ID_OFFSET + index as i64,
        name: properties
            .meter_no
            .as_ref()
            .map(|meter_no| format!("Meter No. {meter_no}")),
        price: None,
        features: properties
            .category
            .as_ref()
            .map(|category| vec![format!("Category: {category}")]),
        address,
        longitude: coordinates[0],
        latitude: coordinates[1],
        route: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arcgis::ArcgisPointGeometry;

    #[test]
    fn maps_meter_properties_into_feature() {
        let feature = ArcgisFeature {
            geometry: Some(ArcgisPointGeometry {
                coordinates: [153.02, -27.47],
            }),
            properties: MeterProperties {
                meter_no: Some("12345".to_string()),
                category: Some("CBD".to_string()),
                street: Some("Adelaide St".to_string()),
                suburb: Some("Brisbane City".to_string()),
            },
        };

        let mapped = map_feature(2, [153.02, -27.47], &feature);
        assert_eq!(mapped.id, 102);
        assert_eq!(mapped.name.as_deref(), Some("Meter No. 12345"));
        assert_eq!(
            mapped.features.as_deref(),
            Some(&["Category: CBD".to_string()][..])
        );
        assert_eq!(
            mapped.address.as_deref(),
            Some("Adelaide St, Brisbane City")
        );
        assert!(mapped.price.is_none());
        assert!(mapped.route.is_none());
    }

    #[test]
    fn missing_street_fields_collapse_gracefully() {
        let feature = ArcgisFeature {
            geometry: None,
            properties: MeterProperties {
                meter_no: None,
                category: None,
                street: None,
                suburb: Some("Fortitude Valley".to_string()),
            },
        };

        let mapped = map_feature(0, [153.03, -27.45], &feature);
        assert_eq!(mapped.id, 100);
        assert!(mapped.name.is_none());
        assert_eq!(mapped.address.as_deref(), Some("Fortitude Valley"));
    }
}
