use serde::Serialize;

use crate::error::RoutingError;

/// A routing-provider waypoint for one end of a route request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub side_of_road: bool,
    pub vehicle_stopover: bool,
    pub location: Location,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    /// Builds a waypoint, rejecting coordinates the provider would bounce.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidWaypoint`] for non-finite or
    /// out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, RoutingError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(RoutingError::InvalidWaypoint(format!(
                "latitude {latitude} out of range"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(RoutingError::InvalidWaypoint(format!(
                "longitude {longitude} out of range"
            )));
        }
        Ok(Self {
            side_of_road: true,
            vehicle_stopover: false,
            location: Location {
                lat_lng: LatLng {
                    latitude,
                    longitude,
                },
            },
        })
    }
}

/// Request body for `computeRoutes`. The travel config mirrors what the
/// provider expects for traffic-aware driving directions in Australia.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub units: &'static str,
    pub travel_mode: &'static str,
    pub routing_preference: &'static str,
    pub region_code: &'static str,
    pub language_code: &'static str,
    pub traffic_model: &'static str,
}

impl ComputeRoutesRequest {
    pub(crate) fn new(origin: Waypoint, destination: Waypoint) -> Self {
        Self {
            origin,
            destination,
            units: "METRIC",
            travel_mode: "DRIVE",
            routing_preference: "TRAFFIC_AWARE_OPTIMAL",
            region_code: "au",
            language_code: "en-AU",
            traffic_model: "BEST_GUESS",
        }
    }
}
