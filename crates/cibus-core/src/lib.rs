pub mod app_config;
pub mod config;
pub mod fooditems;
pub mod model;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use fooditems::{format_food_items, serves_cold_drinks, split_permit_food_items};
pub use model::{Branch, Coordinate, Location, SearchResult, Vendor};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// How a failed search is classified when it is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network, transport, timeout, or non-2xx response.
    FetchFailure,
    /// Malformed response body or malformed coordinate data.
    ParseFailure,
    /// The map engine rejected a source or layer update.
    RenderFailure,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::FetchFailure => write!(f, "fetch failure"),
            FailureKind::ParseFailure => write!(f, "parse failure"),
            FailureKind::RenderFailure => write!(f, "render failure"),
        }
    }
}
