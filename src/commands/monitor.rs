//! Monitor command handler.
//!
//! Validates the flags, opens the output sinks and runs the refresh loop
//! against the local host.

use anyhow::Result;
use clap::ArgMatches;

use crate::core::config::RunConfig;
use crate::core::monitor::{RefreshLoop, ShutdownSignal, SysinfoSource};
use crate::ui::output::OutputSink;

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = RunConfig::from_matches(matches);
    config.validate()?;

    let sink = OutputSink::open(config.log_path.as_deref())?;
    let shutdown = ShutdownSignal::install()?;

    let summary = RefreshLoop::new(SysinfoSource::new(), sink, config, shutdown).run()?;
    log::debug!(
        "Run finished after {} refreshes (interrupted: {})",
        summary.refreshes,
        summary.interrupted
    );

    Ok(())
}
