//! Host metric monitoring.
//!
//! This module samples CPU, memory, disk, network, uptime and host identity
//! and drives the refresh loop that prints them.

mod metrics;
mod refresh;
mod sampler;
mod severity;
mod shutdown;

pub use metrics::{HostIdentity, MetricSample, Section};
pub use refresh::{RefreshLoop, RunState, RunSummary, FAREWELL, SUMMARY_HEADER};
pub use sampler::{MetricSource, SysinfoSource};
pub use severity::{SeverityBand, CRITICAL_THRESHOLD, WARNING_THRESHOLD};
pub use shutdown::{ShutdownSignal, ShutdownTrigger};
