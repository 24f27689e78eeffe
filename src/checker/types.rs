// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::Client;

/// One URL to check and the status it must answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub expected_status: u16,
}

/// What happened when a target was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The endpoint answered with the expected status.
    Matched { status: u16 },
    /// The endpoint answered, but with a different status.
    Mismatched { actual: u16, expected: u16 },
    /// No status was obtained.
    TransportError(String),
}

/// A target together with its outcome. Renders as the report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub target: Target,
    pub outcome: CheckOutcome,
}

/// Aggregate over a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
}

/// [`StatusProbe`](super::traits::StatusProbe) backed by a reqwest client
/// whose timeout covers the whole request.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    pub client: Client,
    pub timeout: Duration,
}

/// Checks targets through a probe.
#[derive(Debug)]
pub struct EndpointChecker<P> {
    pub probe: P,
}
