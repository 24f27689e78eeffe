// Standard library
use std::io;
use std::process::ExitCode;

// 3rd party crates
use tracing::{error, info};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

// Project imports
use alb_probe::checker;
use alb_probe::settings::constants::DEFAULT_LOG_LEVEL;
use alb_probe::settings::ValidatedSettings;

/// HTTP stack crates whose logs are clamped to errors.
const QUIET_CRATES: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// Checks each endpoint behind the load balancer once, one after another,
/// prints a line per endpoint plus a summary, and exits with 0 only when
/// every endpoint returned its expected status.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let settings: ValidatedSettings = match ValidatedSettings::load_embedded() {
        Ok(settings) => settings,
        Err(e) => {
            setup_logging(DEFAULT_LOG_LEVEL);
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&settings.get_log_level());
    info!("⚙️ Settings have been loaded.");

    let mut stdout = io::stdout();
    match checker::run(&settings, &mut stdout).await {
        Ok(summary) => ExitCode::from(summary.exit_status()),
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber. Stdout is reserved for the report.
fn setup_logging(log_level: &str) {
    let mut filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level);

    for name in QUIET_CRATES {
        if let Ok(directive) = format!("{}=error", name).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}
