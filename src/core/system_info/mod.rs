pub mod battery;
pub mod collector;
pub mod cpu;
pub mod memory;
pub mod network;
pub mod os;
pub mod provider;
pub mod session;
pub mod storage;
pub mod temperature;
pub mod types;
pub mod uptime;
pub mod user;

pub use collector::collect_snapshot;
pub use provider::{HostProvider, MetricsProvider};
pub use types::*;
