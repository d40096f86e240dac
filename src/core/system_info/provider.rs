//! Access to raw host metrics.
//!
//! [`MetricsProvider`] is the seam between the fetch pipeline and the
//! operating system. [`HostProvider`] talks to the real machine; tests supply
//! their own implementation to simulate other hosts.

use crate::core::system_info::types::{
    BatteryStatus, CpuSample, OsIdentity, SensorReading, Usage,
};
use crate::core::system_info::{battery, cpu, memory, network, os, storage, temperature, uptime, user};
use crate::error::Result;
use std::net::IpAddr;
use std::time::Duration;

pub trait MetricsProvider {
    /// OS name and icon key; failure aborts the run
    fn os_identity(&self) -> Result<OsIdentity>;

    /// Current user; failure aborts the run
    fn username(&self) -> Result<String>;

    /// Host name; failure aborts the run
    fn hostname(&self) -> Result<String>;

    /// Boot time in seconds since the Unix epoch
    fn boot_time(&self) -> u64;

    /// Host environment lookup, used as a data source only
    fn env_var(&self, name: &str) -> Option<String>;

    fn cpu(&self) -> CpuSample;

    /// Every temperature reading the platform exposes; may be empty
    fn temperature_sensors(&self) -> Vec<SensorReading>;

    /// `Ok(None)` when the machine has no battery
    fn battery(&self) -> Result<Option<BatteryStatus>>;

    fn memory(&self) -> Usage;

    /// `None` when no volume could be found
    fn root_volume(&self) -> Option<Usage>;

    fn private_ip(&self) -> Result<IpAddr>;

    fn public_ip(&self) -> Result<String>;
}

/// Provider backed by the machine richfetch runs on
#[derive(Debug, Clone)]
pub struct HostProvider {
    public_ip_endpoint: String,
    public_ip_timeout: Duration,
}

impl HostProvider {
    pub fn new() -> Self {
        Self {
            public_ip_endpoint: network::PUBLIC_IP_ENDPOINT.to_string(),
            public_ip_timeout: network::PUBLIC_IP_TIMEOUT,
        }
    }

    /// Use a different address lookup service
    pub fn with_public_ip_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.public_ip_endpoint = endpoint.into();
        self
    }

    pub fn with_public_ip_timeout(mut self, timeout: Duration) -> Self {
        self.public_ip_timeout = timeout;
        self
    }
}

impl Default for HostProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for HostProvider {
    fn os_identity(&self) -> Result<OsIdentity> {
        os::collect()
    }

    fn username(&self) -> Result<String> {
        user::username()
    }

    fn hostname(&self) -> Result<String> {
        user::hostname()
    }

    fn boot_time(&self) -> u64 {
        uptime::boot_time()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn cpu(&self) -> CpuSample {
        cpu::collect()
    }

    fn temperature_sensors(&self) -> Vec<SensorReading> {
        temperature::read_sensors()
    }

    fn battery(&self) -> Result<Option<BatteryStatus>> {
        battery::collect()
    }

    fn memory(&self) -> Usage {
        memory::collect()
    }

    fn root_volume(&self) -> Option<Usage> {
        storage::root_volume()
    }

    fn private_ip(&self) -> Result<IpAddr> {
        network::private_ip()
    }

    fn public_ip(&self) -> Result<String> {
        network::public_ip(&self.public_ip_endpoint, self.public_ip_timeout)
    }
}
