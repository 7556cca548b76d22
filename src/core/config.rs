use clap::ArgMatches;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::monitor::Section;
use crate::error::{Result, SyspeekError};

pub const REFRESH_WITHOUT_CATEGORIES: &str =
    "Refresh is set but no data flags selected. Use --all or individual flags.";
pub const NO_CATEGORIES: &str =
    "Please specify at least one of --cpu, --mem, --net, --disk, or --all";

/// Metric categories selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub cpu: bool,
    pub mem: bool,
    pub net: bool,
    pub disk: bool,
    pub all: bool,
}

impl CategorySelection {
    /// Returns a selection with every category enabled
    pub fn all() -> Self {
        Self {
            all: true,
            ..Default::default()
        }
    }

    pub fn any(&self) -> bool {
        self.cpu || self.mem || self.net || self.disk || self.all
    }

    /// Falls back to `all` when nothing is selected
    pub fn effective(&self) -> Self {
        if self.any() {
            *self
        } else {
            Self::all()
        }
    }

    /// Sections printed each cycle, in print order
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.includes(*section))
            .collect()
    }

    fn includes(&self, section: Section) -> bool {
        match section {
            Section::SystemInfo => self.any(),
            Section::Uptime => self.all,
            Section::Memory => self.all || self.mem,
            Section::Cpu => self.all || self.cpu,
            Section::Disk => self.all || self.disk,
            Section::Network => self.all || self.net,
        }
    }
}

/// Run configuration, built once at startup and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub categories: CategorySelection,
    /// Seconds between cycles; zero or negative means a single pass
    pub refresh_secs: i64,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            categories: CategorySelection {
                cpu: matches.get_flag("cpu"),
                mem: matches.get_flag("mem"),
                net: matches.get_flag("net"),
                disk: matches.get_flag("disk"),
                all: matches.get_flag("all"),
            },
            refresh_secs: matches.get_one::<i64>("refresh").copied().unwrap_or(0),
            log_path: matches.get_one::<PathBuf>("log").cloned(),
        }
    }

    /// Reject flag combinations that cannot produce any output
    pub fn validate(&self) -> Result<()> {
        if self.refresh_secs > 0 && !self.categories.any() {
            return Err(SyspeekError::validation(REFRESH_WITHOUT_CATEGORIES));
        }

        if !self.categories.any() {
            return Err(SyspeekError::validation(NO_CATEGORIES));
        }

        Ok(())
    }

    /// Sleep between cycles, `None` in single-pass mode
    pub fn interval(&self) -> Option<Duration> {
        u64::try_from(self.refresh_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
