use thiserror::Error;

/// Search radius applied when the client sends no usable `distance` parameter.
pub const DEFAULT_SEARCH_DISTANCE_M: f64 = 1000.0;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid {name}: {value}")]
    InvalidCoordinate { name: &'static str, value: String },
}

/// A validated search request: the point the user picked plus a radius.
///
/// Constructed once per search via [`SearchQuery::new`] and never mutated;
/// every adapter and the route enricher receive the same instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    latitude: f64,
    longitude: f64,
    distance_m: f64,
}

impl SearchQuery {
    /// Builds a query from raw parameter values.
    ///
    /// `distance_m` falls back to [`DEFAULT_SEARCH_DISTANCE_M`] when absent
    /// or non-positive; callers that parse it from a string should pass
    /// `None` on parse failure as well.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidCoordinate`] when either coordinate is
    /// non-finite or outside the valid geographic range.
    pub fn new(
        latitude: f64,
        longitude: f64,
        distance_m: Option<f64>,
    ) -> Result<Self, QueryError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(QueryError::InvalidCoordinate {
                name: "latitude",
                value: latitude.to_string(),
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(QueryError::InvalidCoordinate {
                name: "longitude",
                value: longitude.to_string(),
            });
        }

        let distance_m = match distance_m {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => DEFAULT_SEARCH_DISTANCE_M,
        };

        Ok(Self {
            latitude,
            longitude,
            distance_m,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Search radius in meters. Adapters convert to their provider's unit.
    #[must_use]
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Search radius in kilometers, for providers that take km.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}
