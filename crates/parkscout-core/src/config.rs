use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_METERS_URL: &str =
    "https://services2.arcgis.com/dEKgZETqwmDAh1rP/arcgis/rest/services/parking_meters/FeatureServer/0";
const DEFAULT_DISABLED_URL: &str =
    "https://services2.arcgis.com/dEKgZETqwmDAh1rP/arcgis/rest/services/Disability_permit_parking/FeatureServer/0";
const DEFAULT_WILSON_URL: &str = "https://www.wilsonparking.com.au";
const DEFAULT_SECURE_URL: &str = "https://spa-fa-web-proxy-prd-ae.azurewebsites.net";
const DEFAULT_ROUTING_URL: &str = "https://routes.googleapis.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PARKSCOUT_ENV", "development"));
    let bind_addr = parse_addr("PARKSCOUT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PARKSCOUT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PARKSCOUT_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("PARKSCOUT_USER_AGENT", "parkscout/0.1 (parking-search)");

    let meters_url = or_default("PARKSCOUT_METERS_URL", DEFAULT_METERS_URL);
    let disabled_url = or_default("PARKSCOUT_DISABLED_URL", DEFAULT_DISABLED_URL);
    let wilson_url = or_default("PARKSCOUT_WILSON_URL", DEFAULT_WILSON_URL);
    let secure_url = or_default("PARKSCOUT_SECURE_URL", DEFAULT_SECURE_URL);
    let routing_url = or_default("PARKSCOUT_ROUTING_URL", DEFAULT_ROUTING_URL);
    let routing_api_key = lookup("GMAPS_API_KEY").ok();

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
        meters_url,
        disabled_url,
        wilson_url,
        secure_url,
        routing_url,
        routing_api_key,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults should suffice");
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.routing_api_key.is_none());
        assert!(config.meters_url.contains("parking_meters"));
    }

    #[test]
    fn build_app_config_overrides_provider_urls() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PARKSCOUT_WILSON_URL", "http://127.0.0.1:9000");
        map.insert("PARKSCOUT_ROUTING_URL", "http://127.0.0.1:9001");
        map.insert("GMAPS_API_KEY", "test-key");
        let config = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(config.wilson_url, "http://127.0.0.1:9000");
        assert_eq!(config.routing_url, "http://127.0.0.1:9001");
        assert_eq!(config.routing_api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn build_app_config_rejects_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PARKSCOUT_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARKSCOUT_BIND_ADDR"),
            "expected InvalidEnvVar(PARKSCOUT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PARKSCOUT_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARKSCOUT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(PARKSCOUT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
