/// Configuration compiled into the binary. It is the only settings source.
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "warn"

# Per-request timeout in seconds, covering connect and read
[request]
timeout_secs = 5

# Load balancer under test
[alb]
scheme = "http"
dns_name = "services-alb-1402427192.us-east-1.elb.amazonaws.com"

# Endpoints are checked in the order listed here
[[endpoints]]
path = "/service1"

[[endpoints]]
path = "/service2"
# Optional: expected HTTP status, 200 if not specified
expected_status = 200
"#;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

pub fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

pub fn default_expected_status() -> u16 {
    DEFAULT_EXPECTED_STATUS
}
