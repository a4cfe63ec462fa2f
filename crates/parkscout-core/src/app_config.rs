use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Per-request timeout applied to every upstream call.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Base URL of the parking-meter ArcGIS feature service layer.
    pub meters_url: String,
    /// Base URL of the disability-permit ArcGIS feature service layer.
    pub disabled_url: String,
    /// Base URL of the Wilson Parking site (no path).
    pub wilson_url: String,
    /// Base URL of the Secure Parking search proxy (no path).
    pub secure_url: String,
    /// Base URL of the routing API (no path).
    pub routing_url: String,
    /// API key sent as `X-Goog-Api-Key` on routing calls. Optional in
    /// development so the server can run against mock upstreams.
    pub routing_api_key: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("meters_url", &self.meters_url)
            .field("disabled_url", &self.disabled_url)
            .field("wilson_url", &self.wilson_url)
            .field("secure_url", &self.secure_url)
            .field("routing_url", &self.routing_url)
            .field(
                "routing_api_key",
                &self.routing_api_key.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
