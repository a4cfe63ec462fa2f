use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use parkscout_core::geojson::FeatureCollection;
use parkscout_core::{QueryError, SearchQuery};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Raw query parameters. Everything arrives as an optional string and is
/// validated here so malformed input gets the JSON error shape instead of
/// axum's built-in rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchParams {
    latitude: Option<String>,
    longitude: Option<String>,
    distance: Option<String>,
    place_id: Option<String>,
}

pub(super) async fn handle_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let query = parse_query(&params)?;

    tracing::debug!(
        request_id = %req_id.0,
        latitude = query.latitude(),
        longitude = query.longitude(),
        distance_m = query.distance_m(),
        place_id = params.place_id.as_deref(),
        "running search"
    );

    let collection = state.search.search(&query).await;
    Ok(Json(collection))
}

/// Validates raw parameters into a [`SearchQuery`]. No adapter runs until
/// this succeeds. Distance degrades to the default on absent or unparsable
/// values; coordinates do not.
fn parse_query(params: &SearchParams) -> Result<SearchQuery, ApiError> {
    let latitude = parse_coordinate(params.latitude.as_deref(), "latitude")?;
    let longitude = parse_coordinate(params.longitude.as_deref(), "longitude")?;
    let distance = params
        .distance
        .as_deref()
        .and_then(|d| d.trim().parse::<f64>().ok());

    SearchQuery::new(latitude, longitude, distance).map_err(ApiError::from)
}

fn parse_coordinate(raw: Option<&str>, name: &'static str) -> Result<f64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::from(QueryError::MissingParameter(name)))?;
    raw.trim().parse::<f64>().map_err(|_| {
        ApiError::from(QueryError::InvalidCoordinate {
            name,
            value: raw.to_string(),
        })
    })
}

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, error.to_string())
    }
}
