// UI and formatting module

pub mod banner;
pub mod formatters;
pub mod output;

// Re-export commonly used items for cleaner imports
pub use formatters::{bytes_to_gb, bytes_to_mb, format_elapsed, format_sample, format_uptime};
pub use output::OutputSink;
