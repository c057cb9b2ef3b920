use std::net::SocketAddr;
use std::path::PathBuf;

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

/// Runtime settings shared by the search client, the search server, and the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the service exposing `GET /search?q=`.
    pub search_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub bind_addr: SocketAddr,
    /// Permit dataset served by `cibus-server`.
    pub dataset_path: PathBuf,
    /// Upper bound on permit records considered per query.
    pub max_hits: usize,
}
