use std::fmt;

/// One output block of a refresh cycle.
///
/// Declaration order is the fixed print order of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    SystemInfo,
    Uptime,
    Memory,
    Cpu,
    Disk,
    Network,
}

impl Section {
    /// Every section, in print order
    pub const ALL: [Section; 6] = [
        Section::SystemInfo,
        Section::Uptime,
        Section::Memory,
        Section::Cpu,
        Section::Disk,
        Section::Network,
    ];

    /// Header line written before the section's data lines
    pub fn header(&self) -> &'static str {
        match self {
            Section::SystemInfo => "=== System Info ===",
            Section::Uptime => "=== Uptime ===",
            Section::Memory => "=== Memory Usage ===",
            Section::Cpu => "=== CPU Usage ===",
            Section::Disk => "=== Disk Usage ===",
            Section::Network => "=== Network I/O ===",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::SystemInfo => "🧠",
            Section::Uptime => "⏱️ ",
            Section::Memory => "💾",
            Section::Cpu => "⚙️ ",
            Section::Disk => "💽",
            Section::Network => "🌐",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::SystemInfo => "System Info",
            Section::Uptime => "Uptime",
            Section::Memory => "Memory",
            Section::Cpu => "CPU",
            Section::Disk => "Disk",
            Section::Network => "Network",
        };
        f.write_str(name)
    }
}

/// A single reading from an OS metric provider, produced fresh every cycle
#[derive(Debug, Clone, PartialEq)]
pub enum MetricSample {
    CpuUsage {
        percent: f64,
    },
    MemoryUsage {
        used_percent: f64,
        total_bytes: u64,
    },
    /// One per usable mounted partition
    DiskUsage {
        mount_path: String,
        used_percent: f64,
        total_bytes: u64,
    },
    NetworkCounters {
        bytes_sent: u64,
        bytes_received: u64,
    },
    Uptime {
        seconds: u64,
    },
    HostIdentity(HostIdentity),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostIdentity {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub kernel_arch: String,
    pub kernel_version: String,
}

impl MetricSample {
    /// Section this sample is printed under
    pub fn section(&self) -> Section {
        match self {
            MetricSample::CpuUsage { .. } => Section::Cpu,
            MetricSample::MemoryUsage { .. } => Section::Memory,
            MetricSample::DiskUsage { .. } => Section::Disk,
            MetricSample::NetworkCounters { .. } => Section::Network,
            MetricSample::Uptime { .. } => Section::Uptime,
            MetricSample::HostIdentity(_) => Section::SystemInfo,
        }
    }

    /// Usage percentage for samples that carry one
    pub fn percent(&self) -> Option<f64> {
        match self {
            MetricSample::CpuUsage { percent } => Some(*percent),
            MetricSample::MemoryUsage { used_percent, .. }
            | MetricSample::DiskUsage { used_percent, .. } => Some(*used_percent),
            _ => None,
        }
    }
}
