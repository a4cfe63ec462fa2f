//! Shared types and configuration for the parkscout workspace.

mod app_config;
mod config;
pub mod geojson;
mod query;
mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use query::{QueryError, SearchQuery, DEFAULT_SEARCH_DISTANCE_M};
pub use types::{ParkingFeature, RouteResult};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
