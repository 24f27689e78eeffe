// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{
    default_expected_status, default_log_level, default_request_timeout_secs, default_scheme,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    #[serde(default = "default_request_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Alb {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    pub dns_name: String,
}

/// A path on the load balancer and the status it must answer with.
#[derive(Debug, Deserialize, Clone)]
pub struct Endpoint {
    pub path: String,
    #[serde(default = "default_expected_status")]
    pub expected_status: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub request: Request,
    pub alb: Alb,

    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Settings that passed [`Settings::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);
