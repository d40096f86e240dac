// Core fetch logic module

pub mod aggregator;
pub mod severity;
pub mod system_info;

// Re-export commonly used items
pub use aggregator::{aggregate, build_display_list};
pub use severity::{classify_temperature, classify_usage, Severity};
pub use system_info::{FetchOptions, FetchSnapshot, HostProvider, MetricsProvider};
