use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    /// The origin or destination cannot be turned into a valid waypoint.
    /// Detected before any outbound call — client-input class.
    #[error("invalid waypoint: {0}")]
    InvalidWaypoint(String),

    /// The provider answered but found no route — not-found class.
    #[error("no route found for feature {feature_id}")]
    NoRoute { feature_id: i64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from routing provider")]
    UnexpectedStatus { status: reqwest::StatusCode },

    #[error("failed to deserialize routing response: {0}")]
    Deserialize(#[from] serde_json::Error),
}
