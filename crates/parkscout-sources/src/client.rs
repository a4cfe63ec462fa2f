use std::time::Duration;

use parkscout_core::{AppConfig, ParkingFeature, SearchQuery};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::{disabled, meters, secure, wilson};

/// Client for every parking-data provider.
///
/// Holds one long-lived `reqwest::Client` (built once at startup, shared by
/// all adapters) plus the per-provider base URLs, which are configurable so
/// tests can point adapters at a wiremock server.
pub struct SourceClient {
    client: Client,
    meters_url: String,
    disabled_url: String,
    wilson_url: String,
    secure_url: String,
}

impl SourceClient {
    /// Creates a `SourceClient` from application config.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            meters_url: config.meters_url.clone(),
            disabled_url: config.disabled_url.clone(),
            wilson_url: config.wilson_url.clone(),
            secure_url: config.secure_url.clone(),
        })
    }

    /// On-street metered parking from the council ArcGIS layer.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, non-2xx status, or a
    /// response that does not match the provider schema.
    pub async fn fetch_parking_meters(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<ParkingFeature>, SourceError> {
        meters::fetch(&self.client, &self.meters_url, query).await
    }

    /// Disability-permit bays from the council ArcGIS layer.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, non-2xx status, or a
    /// response that does not match the provider schema.
    pub async fn fetch_disabled_parking(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<ParkingFeature>, SourceError> {
        disabled::fetch(&self.client, &self.disabled_url, query).await
    }

    /// Commercial carparks from the Wilson Parking API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, non-2xx status, or a
    /// response that does not match the provider schema.
    pub async fn fetch_wilson_parking(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<ParkingFeature>, SourceError> {
        wilson::fetch(&self.client, &self.wilson_url, query).await
    }

    /// Commercial carparks from the Secure Parking search proxy.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, non-2xx status, or a
    /// response that does not match the provider schema.
    pub async fn fetch_secure_parking(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<ParkingFeature>, SourceError> {
        secure::fetch(&self.client, &self.secure_url, query).await
    }
}

/// Checks the status and decodes the body, keeping enough context for the
/// aggregator's per-source failure logs to say which schema broke.
pub(crate) async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &'static str,
) -> Result<T, SourceError> {
    let status = response.status();
    tracing::debug!(context, %status, url = %response.url(), "provider responded");
    if !status.is_success() {
        return Err(SourceError::UnexpectedStatus {
            status,
            url: response.url().to_string(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| SourceError::Deserialize { context, source })
}
