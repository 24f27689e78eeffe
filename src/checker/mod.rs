//! Endpoint health checking.
//!
//! Each [`Target`](types::Target) is fetched once with a plain GET through a
//! [`StatusProbe`](traits::StatusProbe). The response status is compared with
//! the target's expected status and the outcome is reported as one line of
//! text. Transport failures never abort a run; they become
//! [`CheckOutcome::TransportError`](types::CheckOutcome::TransportError).
//!
//! Targets are checked strictly one after another.

pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::CheckError;
pub use functions::{build_targets, run, run_checks};
pub use traits::StatusProbe;
pub use types::{CheckOutcome, CheckResult, EndpointChecker, HttpProbe, Summary, Target};
