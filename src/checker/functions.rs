// Standard library
use std::error::Error;
use std::io::Write;

// 3rd party crates
use tracing::info;

// Project imports
use crate::settings::Settings;

// Current module imports
use super::traits::StatusProbe;
use super::types::{EndpointChecker, HttpProbe, Summary, Target};

/// Builds the target list from settings, in configured order.
pub fn build_targets(settings: &Settings) -> Vec<Target> {
    let base_url: String = settings.get_base_url();
    settings
        .endpoints
        .iter()
        .map(|endpoint| Target::new(&base_url, &endpoint.path, endpoint.expected_status))
        .collect()
}

/// Checks every target in order and writes the full report to `out`.
pub async fn run_checks<P: StatusProbe, W: Write>(
    checker: &EndpointChecker<P>,
    alb_dns: &str,
    targets: &[Target],
    out: &mut W,
) -> std::io::Result<Summary> {
    writeln!(out, "Testing endpoints for ALB: {}\n", alb_dns)?;

    let mut results = Vec::with_capacity(targets.len());
    for target in targets {
        results.push(checker.report(target, out).await?);
    }

    let summary: Summary = Summary::from_results(&results);
    writeln!(out, "\n{}", summary)?;
    out.flush()?;

    Ok(summary)
}

/// Checks the configured load balancer over HTTP.
pub async fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Summary, Box<dyn Error>> {
    let targets: Vec<Target> = build_targets(settings);
    info!(
        "Checking {} endpoints with a {:?} timeout",
        targets.len(),
        settings.get_request_timeout()
    );

    let checker = EndpointChecker::new(HttpProbe::new(settings.get_request_timeout())?);
    let summary: Summary = run_checks(&checker, settings.alb.dns_name.trim(), &targets, out).await?;

    info!("{}", summary);
    Ok(summary)
}
