// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Failed to load embedded configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Request timeout must be greater than 0, got {0}")]
    InvalidRequestTimeout(u64),
    #[error("Invalid scheme: {0}. Must be one of: http, https")]
    InvalidScheme(String),
    #[error("Load balancer DNS name is empty")]
    MissingDnsName,
    #[error("No endpoints are configured")]
    NoEndpoints,
    #[error("Endpoint path must start with '/', got '{0}'")]
    InvalidPath(String),
    #[error("Expected status for '{path}' must be within 100-599, got {status}")]
    InvalidExpectedStatus { path: String, status: u16 },
}
