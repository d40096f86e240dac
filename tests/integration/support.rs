use richfetch::core::system_info::{BatteryStatus, CpuSample, OsIdentity, SensorReading, Usage};
use richfetch::{FetchError, MetricsProvider, Result};
use std::collections::HashMap;
use std::net::IpAddr;

pub const GIB: u64 = 1024 * 1024 * 1024;
pub const NOW: i64 = 1_700_000_000;

/// A simulated host with every metric under test control
#[derive(Debug, Clone)]
pub struct ScriptedHost {
    pub os_name: Option<String>,
    pub username: Option<String>,
    pub hostname: String,
    pub boot_time: u64,
    pub env: HashMap<String, String>,
    pub cpu: CpuSample,
    pub sensors: Vec<SensorReading>,
    pub battery: Option<BatteryStatus>,
    pub battery_fails: bool,
    pub memory: Usage,
    pub disk: Option<Usage>,
    pub private_ip: Option<IpAddr>,
    pub public_ip: Option<String>,
}

impl ScriptedHost {
    /// A laptop exposing every metric
    pub fn laptop() -> Self {
        let mut env = HashMap::new();
        env.insert("DESKTOP_SESSION".to_string(), "plasma".to_string());

        Self {
            os_name: Some("Arch Linux".to_string()),
            username: Some("ada".to_string()),
            hostname: "engine".to_string(),
            boot_time: (NOW as u64) - (2 * 3600 + 5 * 60 + 30),
            env,
            cpu: CpuSample {
                brand: "Intel(R) Core(TM) i7-1165G7 @ 2.80GHz".to_string(),
                usage_percent: 23.4,
            },
            sensors: vec![
                SensorReading {
                    chip: "acpitz".to_string(),
                    label: "acpitz temp1".to_string(),
                    celsius: 41.0,
                },
                SensorReading {
                    chip: "coretemp".to_string(),
                    label: "coretemp Package id 0".to_string(),
                    celsius: 63.0,
                },
            ],
            battery: Some(BatteryStatus {
                percent: 57.5,
                plugged: false,
            }),
            battery_fails: false,
            memory: Usage::new(8 * GIB, 16 * GIB),
            disk: Some(Usage::new(200 * GIB, 500 * GIB)),
            private_ip: "10.0.0.12".parse().ok(),
            public_ip: Some("198.51.100.4".to_string()),
        }
    }

    /// A desktop with no battery, no sensors and no desktop session
    pub fn headless_desktop() -> Self {
        Self {
            env: HashMap::new(),
            sensors: vec![],
            battery: None,
            ..Self::laptop()
        }
    }
}

impl MetricsProvider for ScriptedHost {
    fn os_identity(&self) -> Result<OsIdentity> {
        let name = self
            .os_name
            .clone()
            .ok_or_else(|| FetchError::os_identity("os-release missing"))?;
        Ok(richfetch::core::system_info::os::from_pretty_name(name))
    }

    fn username(&self) -> Result<String> {
        self.username
            .clone()
            .ok_or_else(|| FetchError::identity("no login name"))
    }

    fn hostname(&self) -> Result<String> {
        Ok(self.hostname.clone())
    }

    fn boot_time(&self) -> u64 {
        self.boot_time
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn cpu(&self) -> CpuSample {
        self.cpu.clone()
    }

    fn temperature_sensors(&self) -> Vec<SensorReading> {
        self.sensors.clone()
    }

    fn battery(&self) -> Result<Option<BatteryStatus>> {
        if self.battery_fails {
            return Err(FetchError::other("power supply class unreadable"));
        }
        Ok(self.battery)
    }

    fn memory(&self) -> Usage {
        self.memory
    }

    fn root_volume(&self) -> Option<Usage> {
        self.disk
    }

    fn private_ip(&self) -> Result<IpAddr> {
        self.private_ip
            .ok_or_else(|| FetchError::network("Network is unreachable"))
    }

    fn public_ip(&self) -> Result<String> {
        self.public_ip
            .clone()
            .ok_or_else(|| FetchError::network("dns error: failed to lookup address"))
    }
}
