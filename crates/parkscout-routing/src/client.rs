use std::time::Duration;

use parkscout_core::{AppConfig, RouteResult};
use reqwest::Client;
use serde::Deserialize;

use crate::error::RoutingError;
use crate::types::{ComputeRoutesRequest, Waypoint};

#[derive(Debug, Deserialize)]
struct ComputeRoutesResponse {
    #[serde(default)]
    routes: Vec<serde_json::Value>,
}

/// Client for the routing provider's `computeRoutes` endpoint.
///
/// Built once at startup from config; the base URL is configurable so tests
/// can point it at a wiremock server. The API key is optional — absent in
/// development the header is simply not sent.
pub struct RoutingClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RoutingClient {
    /// Creates a `RoutingClient` from application config.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.routing_url.trim_end_matches('/').to_string(),
            api_key: config.routing_api_key.clone(),
        })
    }

    /// Requests the single best driving route from `origin` to `destination`,
    /// both given as `(latitude, longitude)`.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InvalidWaypoint`] — either endpoint is not a valid
    ///   geographic coordinate; no outbound call is made.
    /// - [`RoutingError::NoRoute`] — the provider answered with an empty
    ///   route list.
    /// - [`RoutingError::Http`] / [`RoutingError::UnexpectedStatus`] /
    ///   [`RoutingError::Deserialize`] — transport and contract failures.
    pub async fn compute_route(
        &self,
        feature_id: i64,
        origin: (f64, f64),
        destination: (f64, f64),
    ) -> Result<RouteResult, RoutingError> {
        let origin = Waypoint::new(origin.0, origin.1)?;
        let destination = Waypoint::new(destination.0, destination.1)?;
        let request = ComputeRoutesRequest::new(origin, destination);

        tracing::debug!(feature_id, "requesting route");

        let url = format!("{}/directions/v2:computeRoutes", self.base_url);
        let mut builder = self
            .client
            .post(&url)
            .header("X-Goog-FieldMask", "*")
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("X-Goog-Api-Key", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::UnexpectedStatus { status });
        }

        let body = response.text().await?;
        let parsed: ComputeRoutesResponse = serde_json::from_str(&body)?;

        let route = parsed.routes.into_iter().next().ok_or_else(|| {
            tracing::debug!(feature_id, "provider found no route");
            RoutingError::NoRoute { feature_id }
        })?;

        Ok(RouteResult { feature_id, route })
    }
}
