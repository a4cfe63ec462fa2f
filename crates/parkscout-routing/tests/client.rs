//! Integration tests for `RoutingClient::compute_route` against wiremock.

use parkscout_core::{AppConfig, Environment};
use parkscout_routing::{RoutingClient, RoutingError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "info".to_string(),
        request_timeout_secs: 5,
        user_agent: "parkscout-test/0.1".to_string(),
        meters_url: base_url.to_string(),
        disabled_url: base_url.to_string(),
        wilson_url: base_url.to_string(),
        secure_url: base_url.to_string(),
        routing_url: base_url.to_string(),
        routing_api_key: api_key.map(str::to_string),
    }
}

#[tokio::test]
async fn compute_route_returns_first_route_keyed_by_feature_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .and(header("X-Goog-FieldMask", "*"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(body_partial_json(json!({
            "travelMode": "DRIVE",
            "units": "METRIC",
            "origin": { "location": { "latLng": { "latitude": -27.47, "longitude": 153.02 } } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "routes": [
                { "distanceMeters": 840, "duration": "187s", "legs": [] },
                { "distanceMeters": 910, "duration": "201s", "legs": [] }
            ]
        })))
        .mount(&server)
        .await;

    let client = RoutingClient::new(&test_config(&server.uri(), Some("test-key"))).expect("client");
    let result = client
        .compute_route(301, (-27.47, 153.02), (-27.469, 153.024))
        .await
        .expect("route");

    assert_eq!(result.feature_id, 301);
    assert_eq!(result.route["distanceMeters"], 840);
}

#[tokio::test]
async fn empty_routes_array_is_no_route() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "routes": [] })))
        .mount(&server)
        .await;

    let client = RoutingClient::new(&test_config(&server.uri(), None)).expect("client");
    let result = client
        .compute_route(100, (-27.47, 153.02), (-27.469, 153.024))
        .await;

    assert!(
        matches!(result, Err(RoutingError::NoRoute { feature_id: 100 })),
        "expected NoRoute, got: {result:?}"
    );
}

#[tokio::test]
async fn invalid_destination_fails_fast_without_calling_provider() {
    let server = MockServer::start().await;

    // Expect zero requests: the waypoint check trips before any I/O.
    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "routes": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = RoutingClient::new(&test_config(&server.uri(), None)).expect("client");
    let result = client
        .compute_route(100, (-27.47, 153.02), (-95.0, 153.024))
        .await;

    assert!(
        matches!(result, Err(RoutingError::InvalidWaypoint(_))),
        "expected InvalidWaypoint, got: {result:?}"
    );
    server.verify().await;
}

#[tokio::test]
async fn non_2xx_status_is_a_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = RoutingClient::new(&test_config(&server.uri(), None)).expect("client");
    let result = client
        .compute_route(100, (-27.47, 153.02), (-27.469, 153.024))
        .await;

    assert!(
        matches!(result, Err(RoutingError::UnexpectedStatus { status }) if status.as_u16() == 403),
        "expected UnexpectedStatus, got: {result:?}"
    );
}
