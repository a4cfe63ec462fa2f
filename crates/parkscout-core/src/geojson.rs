//! GeoJSON wire types for the search response.
//!
//! The response body is a `FeatureCollection` of point features with a
//! top-level `bbox`. The bbox is always derived from the features actually
//! present — it is recomputed whenever the feature set changes, never set
//! directly.

use serde::{Deserialize, Serialize};

use crate::types::ParkingFeature;

/// `[minLon, minLat, maxLon, maxLat]`.
pub type BoundingBox = [f64; 4];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub id: i64,
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub features: Option<Vec<String>>,
    pub address: Option<String>,
    /// Omitted entirely (not serialized as null) when enrichment failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

impl From<ParkingFeature> for Feature {
    fn from(feature: ParkingFeature) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            id: feature.id,
            properties: FeatureProperties {
                name: feature.name,
                price: feature.price,
                features: feature.features,
                address: feature.address,
                route: feature.route,
            },
            geometry: Geometry {
                geometry_type: "Point".to_string(),
                coordinates: [feature.longitude, feature.latitude],
            },
        }
    }
}

impl From<Feature> for ParkingFeature {
    fn from(feature: Feature) -> Self {
        Self {
            id: feature.id,
            name: feature.properties.name,
            price: feature.properties.price,
            features: feature.properties.features,
            address: feature.properties.address,
            longitude: feature.geometry.coordinates[0],
            latitude: feature.geometry.coordinates[1],
            route: feature.properties.route,
        }
    }
}

impl FeatureCollection {
    /// Assembles a collection from normalized features, deriving the bbox.
    ///
    /// `fallback` is the `(longitude, latitude)` of the query point; an empty
    /// feature list produces the degenerate box at that point rather than an
    /// undefined bbox.
    #[must_use]
    pub fn from_features(features: Vec<ParkingFeature>, fallback: (f64, f64)) -> Self {
        let features: Vec<Feature> = features.into_iter().map(Feature::from).collect();
        let bbox = compute_bbox(&features, fallback);
        Self {
            collection_type: "FeatureCollection".to_string(),
            features,
            bbox,
        }
    }
}

/// Minimal axis-aligned box containing every feature's coordinates.
///
/// Empty input yields the degenerate box at `fallback` (`(lon, lat)`).
#[must_use]
pub fn compute_bbox(features: &[Feature], fallback: (f64, f64)) -> BoundingBox {
    if features.is_empty() {
        return [fallback.0, fallback.1, fallback.0, fallback.1];
    }

    let mut bbox = [
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    ];
    for feature in features {
        let [lon, lat] = feature.geometry.coordinates;
        bbox[0] = bbox[0].min(lon);
        bbox[1] = bbox[1].min(lat);
        bbox[2] = bbox[2].max(lon);
        bbox[3] = bbox[3].max(lat);
    }
    bbox
}
