//! Health checker for the services behind an application load balancer.
//!
//! Every configured endpoint gets one plain GET, and the response status is
//! compared with the status the endpoint is expected to return. The program
//! prints one line per endpoint and a summary, then exits with 0 only when
//! every endpoint is healthy.

pub mod checker;
pub mod settings;
