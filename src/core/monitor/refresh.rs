use std::time::{Duration, Instant};

use crate::core::config::RunConfig;
use crate::error::Result;
use crate::ui::banner::{self, SUBTITLE, TITLE};
use crate::ui::formatters::{format_elapsed, format_error, format_sample};
use crate::ui::output::OutputSink;

use super::sampler::MetricSource;
use super::shutdown::ShutdownSignal;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

pub const FAREWELL: &str = "👋 Exiting SysPeek. Thanks for monitoring with us!";
pub const SUMMARY_HEADER: &str = "=== Summary ===";

/// Mutable counters owned by the loop
#[derive(Debug, Clone)]
pub struct RunState {
    pub started: Instant,
    pub refreshes: u64,
}

impl RunState {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            refreshes: 0,
        }
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub refreshes: u64,
    pub interrupted: bool,
}

/// Samples, formats and prints every enabled section, once or on an interval
pub struct RefreshLoop<S: MetricSource> {
    source: S,
    sink: OutputSink,
    config: RunConfig,
    shutdown: ShutdownSignal,
    state: RunState,
    banner: String,
}

impl<S: MetricSource> RefreshLoop<S> {
    pub fn new(source: S, sink: OutputSink, config: RunConfig, shutdown: ShutdownSignal) -> Self {
        Self {
            source,
            sink,
            config,
            shutdown,
            state: RunState::new(),
            banner: banner::render(TITLE),
        }
    }

    /// Run until the single pass completes or an interrupt is observed,
    /// then print the run summary.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.state = RunState::new();
        let interval = self.config.interval();

        let interrupted = loop {
            if !self.run_cycle()? {
                break true;
            }
            self.state.refreshes += 1;
            log::debug!("Refresh {} complete", self.state.refreshes);

            let Some(interval) = interval else {
                break false;
            };
            if self.shutdown.wait(interval) {
                break true;
            }
        };

        let summary = RunSummary {
            elapsed: self.state.started.elapsed(),
            refreshes: self.state.refreshes,
            interrupted,
        };
        self.print_summary(&summary)?;

        Ok(summary)
    }

    /// One pass over the enabled sections. Returns `false` if an interrupt
    /// cut the pass short.
    fn run_cycle(&mut self) -> Result<bool> {
        self.sink.terminal_only(CLEAR_SCREEN)?;
        self.sink.terminal_only(&self.banner)?;
        self.sink.terminal_only(&format!("{}\n\n", SUBTITLE))?;

        for section in self.config.categories.effective().sections() {
            if self.shutdown.is_requested() {
                log::debug!("Abandoning cycle before {}", section);
                return Ok(false);
            }

            self.sink.header(section.header())?;
            match self.source.sample(section) {
                Ok(samples) => {
                    for sample in &samples {
                        let line = format_sample(sample);
                        self.sink.emit(&line.text, line.severity)?;
                    }
                }
                Err(e) => {
                    log::warn!("{} sample failed: {}", section, e);
                    self.sink.line(&format_error(&e))?;
                }
            }
            self.sink.blank()?;
        }

        Ok(true)
    }

    fn print_summary(&mut self, summary: &RunSummary) -> Result<()> {
        if summary.interrupted {
            self.sink.blank()?;
        }
        self.sink.line(FAREWELL)?;
        self.sink.header(SUMMARY_HEADER)?;
        self.sink.line(&format!(
            "⏱️  Total runtime: {}",
            format_elapsed(summary.elapsed)
        ))?;
        self.sink
            .line(&format!("🔁 Total refreshes: {}", summary.refreshes))
    }
}
