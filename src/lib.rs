// SysPeek Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SampleError, SyspeekError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use core::config::RunConfig;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
