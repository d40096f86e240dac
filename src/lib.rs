// richfetch Library - Public API

// Re-export error types
pub mod error;
pub use error::{FetchError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::core::system_info::{FetchOptions, HostProvider, MetricsProvider};

// Initialize logging; RUST_LOG overrides the default `warn` level
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
