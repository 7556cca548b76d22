//! Severity bands for percentage metrics.
//!
//! CPU, memory and disk readings are classified into three bands that drive
//! the terminal color of their output line.

/// Warning band lower bound (%), inclusive
pub const WARNING_THRESHOLD: f64 = 60.0;
/// Critical band lower bound (%), inclusive
pub const CRITICAL_THRESHOLD: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBand {
    Normal,
    Warning,
    Critical,
}

impl SeverityBand {
    /// Classify a usage percentage
    pub fn from_percent(percent: f64) -> Self {
        if percent >= CRITICAL_THRESHOLD {
            SeverityBand::Critical
        } else if percent >= WARNING_THRESHOLD {
            SeverityBand::Warning
        } else {
            SeverityBand::Normal
        }
    }
}
