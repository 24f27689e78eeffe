// Standard library
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

// Current module imports
use super::errors::CheckError;
use super::traits::StatusProbe;
use super::types::{CheckOutcome, CheckResult, EndpointChecker, HttpProbe, Summary, Target};

impl Target {
    /// Joins `base_url` and `path` into a target URL.
    pub fn new(base_url: &str, path: &str, expected_status: u16) -> Self {
        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
            expected_status,
        }
    }
}

impl CheckOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, CheckOutcome::Matched { .. })
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = &self.target.url;
        match &self.outcome {
            CheckOutcome::Matched { status } => write!(f, "{} - Status: {}", url, status),
            CheckOutcome::Mismatched { actual, expected } => {
                write!(f, "{} - Status: {} (expected {})", url, actual, expected)
            }
            CheckOutcome::TransportError(message) => write!(f, "{} - Error: {}", url, message),
        }
    }
}

impl Summary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        Self {
            passed: results.iter().filter(|r| r.outcome.is_healthy()).count(),
            total: results.len(),
        }
    }

    pub fn all_healthy(&self) -> bool {
        self.passed == self.total
    }

    /// Process exit status: 0 when every endpoint is healthy, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.all_healthy() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Results: {}/{} endpoints healthy",
            self.passed, self.total
        )
    }
}

impl HttpProbe {
    /// Builds a probe whose requests give up after `timeout`, connect and read included.
    pub fn new(timeout: Duration) -> Result<Self, CheckError> {
        let client: Client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CheckError::ClientBuild)?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl StatusProbe for HttpProbe {
    async fn get_status(&self, url: &str) -> Result<u16, CheckError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CheckError::from_reqwest(url, self.timeout, e))?;

        let status: u16 = response.status().as_u16();

        // The body is drained so a stalled or truncated read counts as a failure.
        response
            .bytes()
            .await
            .map_err(|e| CheckError::from_reqwest(url, self.timeout, e))?;

        Ok(status)
    }
}

impl<P: StatusProbe> EndpointChecker<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Fetches `target` once and classifies the result. No retries.
    pub async fn check(&self, target: &Target) -> CheckOutcome {
        debug!(url = %target.url, "Checking endpoint");
        match self.probe.get_status(&target.url).await {
            Ok(status) if status == target.expected_status => {
                info!(url = %target.url, status, "Endpoint healthy");
                CheckOutcome::Matched { status }
            }
            Ok(status) => {
                warn!(
                    url = %target.url,
                    status,
                    expected = target.expected_status,
                    "Unexpected status"
                );
                CheckOutcome::Mismatched {
                    actual: status,
                    expected: target.expected_status,
                }
            }
            Err(e) => {
                warn!(url = %target.url, "Request failed: {}", e);
                CheckOutcome::TransportError(e.to_string())
            }
        }
    }

    /// Checks `target` and writes its report line to `out`.
    pub async fn report<W: Write>(&self, target: &Target, out: &mut W) -> io::Result<CheckResult> {
        let result = CheckResult {
            target: target.clone(),
            outcome: self.check(target).await,
        };
        writeln!(out, "{}", result)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new("http://lb.example", "/service1", 200)
    }

    #[test]
    fn target_joins_base_and_path() {
        assert_eq!(target().url, "http://lb.example/service1");
        assert_eq!(
            Target::new("http://lb.example/", "/service2", 204).url,
            "http://lb.example/service2"
        );
    }

    #[test]
    fn matched_line_has_no_expected_suffix() {
        let line = CheckResult {
            target: target(),
            outcome: CheckOutcome::Matched { status: 200 },
        }
        .to_string();
        assert_eq!(line, "http://lb.example/service1 - Status: 200");
        assert!(!line.contains("(expected"));
    }

    #[test]
    fn mismatched_line_names_expected_status() {
        let line = CheckResult {
            target: target(),
            outcome: CheckOutcome::Mismatched {
                actual: 503,
                expected: 200,
            },
        }
        .to_string();
        assert_eq!(
            line,
            "http://lb.example/service1 - Status: 503 (expected 200)"
        );
    }

    #[test]
    fn transport_error_line() {
        let line = CheckResult {
            target: target(),
            outcome: CheckOutcome::TransportError("connection failed: refused".into()),
        }
        .to_string();
        assert_eq!(
            line,
            "http://lb.example/service1 - Error: connection failed: refused"
        );
    }

    #[test]
    fn only_matched_is_healthy() {
        assert!(CheckOutcome::Matched { status: 200 }.is_healthy());
        assert!(!CheckOutcome::Mismatched {
            actual: 200,
            expected: 204
        }
        .is_healthy());
        assert!(!CheckOutcome::TransportError("timeout".into()).is_healthy());
    }

    #[test]
    fn summary_counts_healthy_results() {
        let results = vec![
            CheckResult {
                target: target(),
                outcome: CheckOutcome::TransportError("timeout".into()),
            },
            CheckResult {
                target: Target::new("http://lb.example", "/service2", 200),
                outcome: CheckOutcome::Matched { status: 200 },
            },
        ];
        let summary = Summary::from_results(&results);
        assert_eq!(summary, Summary { passed: 1, total: 2 });
        assert_eq!(summary.to_string(), "Results: 1/2 endpoints healthy");
        assert_eq!(summary.exit_status(), 1);
    }

    #[test]
    fn empty_run_is_healthy() {
        let summary = Summary::from_results(&[]);
        assert!(summary.all_healthy());
        assert_eq!(summary.exit_status(), 0);
    }
}
