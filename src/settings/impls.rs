// Standard library
use std::time::Duration;

// 3rd party crates
use config::{Config, File, FileFormat};

// Current module imports
use super::constants::{default_log_level, default_request_timeout_secs, DEFAULT_CONFIG};
use super::errors::ValidationError;
use super::types::{Log, Request, Settings, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ValidationError> {
        let settings: Config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_request_timeout(&self) -> Duration {
        Duration::from_secs(self.request.timeout_secs)
    }

    /// Base URL of the load balancer, e.g. `http://example.elb.amazonaws.com`.
    pub fn get_base_url(&self) -> String {
        format!(
            "{}://{}",
            self.alb.scheme.to_lowercase(),
            self.alb.dns_name.trim()
        )
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        if self.request.timeout_secs == 0 {
            return Err(ValidationError::InvalidRequestTimeout(
                self.request.timeout_secs,
            ));
        }

        match self.alb.scheme.to_lowercase().as_str() {
            "http" | "https" => {}
            _ => return Err(ValidationError::InvalidScheme(self.alb.scheme.clone())),
        }

        if self.alb.dns_name.trim().is_empty() {
            return Err(ValidationError::MissingDnsName);
        }

        if self.endpoints.is_empty() {
            return Err(ValidationError::NoEndpoints);
        }

        for endpoint in &self.endpoints {
            if !endpoint.path.starts_with('/') {
                return Err(ValidationError::InvalidPath(endpoint.path.clone()));
            }
            if !(100..=599).contains(&endpoint.expected_status) {
                return Err(ValidationError::InvalidExpectedStatus {
                    path: endpoint.path.clone(),
                    status: endpoint.expected_status,
                });
            }
        }

        Ok(())
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    /// Loads and validates the configuration embedded in the binary.
    pub fn load_embedded() -> Result<Self, ValidationError> {
        let settings: Settings = Settings::from_toml(DEFAULT_CONFIG)?;
        Self::new(settings)
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
