use std::time::Duration;

use crate::core::monitor::{MetricSample, SeverityBand};
use crate::error::SampleError;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Human-readable rendering of one sample
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedLine {
    pub text: String,
    /// Set only for percentage-bearing samples
    pub severity: Option<SeverityBand>,
}

/// Convert bytes to megabytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Convert bytes to gigabytes
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Format seconds as "X days, Y hours, Z minutes", truncating leftovers
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds / 3_600) % 24;
    let minutes = (seconds / 60) % 60;
    format!("{} days, {} hours, {} minutes", days, hours, minutes)
}

/// Format wall-clock time rounded to the nearest second (1h2m3s, 4m5s, 6s)
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = ((elapsed.as_nanos() + 500_000_000) / 1_000_000_000) as u64;
    let hours = total / 3_600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

pub fn format_sample(sample: &MetricSample) -> FormattedLine {
    let icon = sample.section().icon();
    let text = match sample {
        MetricSample::HostIdentity(identity) => format!(
            "🧠 Hostname: {}\n🧬 OS: {} {}\n🧱 Architecture: {}\n🧩 Kernel Version: {}",
            identity.hostname,
            identity.platform,
            identity.platform_version,
            identity.kernel_arch,
            identity.kernel_version
        ),
        MetricSample::Uptime { seconds } => {
            format!("{} Uptime: {}", icon, format_uptime(*seconds))
        }
        MetricSample::MemoryUsage {
            used_percent,
            total_bytes,
        } => format!(
            "{} Memory: {:.2}% used of {:.2} GB",
            icon,
            used_percent,
            bytes_to_gb(*total_bytes)
        ),
        MetricSample::CpuUsage { percent } => format!("{} CPU Usage: {:.2}%", icon, percent),
        MetricSample::DiskUsage {
            mount_path,
            used_percent,
            total_bytes,
        } => format!(
            "{} {} — Used: {:.2}% of {:.2} GB",
            icon,
            mount_path,
            used_percent,
            bytes_to_gb(*total_bytes)
        ),
        MetricSample::NetworkCounters {
            bytes_sent,
            bytes_received,
        } => format!(
            "{} Network: Sent {:.2} MB | Received {:.2} MB",
            icon,
            bytes_to_mb(*bytes_sent),
            bytes_to_mb(*bytes_received)
        ),
    };

    FormattedLine {
        text,
        severity: sample.percent().map(SeverityBand::from_percent),
    }
}

/// Inline error line for a section whose sample failed
pub fn format_error(error: &SampleError) -> String {
    format!("{} {} Error: {}", error.section.icon(), error.section, error)
}
