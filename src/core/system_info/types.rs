use std::net::IpAddr;
use std::time::Duration;

/// Bytes in one gibibyte
pub const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Operating system identity as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsIdentity {
    /// Text shown in the OS row, e.g. "Arch Linux" or "macOS 14.5"
    pub display_name: String,
    /// Key used for icon lookup: the pretty name, "macOS" or "Windows"
    pub icon_key: String,
}

/// The current user and the machine they are logged into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHost {
    pub username: String,
    pub hostname: String,
}

impl UserHost {
    pub fn display(&self) -> String {
        format!("{}@{}", self.username, self.hostname)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuSample {
    pub brand: String,
    pub usage_percent: f64,
}

/// One reading from a hardware temperature sensor
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Driver or chip name, e.g. "coretemp" or "k10temp"
    pub chip: String,
    pub label: String,
    pub celsius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    /// Charge, 0-100
    pub percent: f64,
    pub plugged: bool,
}

impl BatteryStatus {
    /// Whole percent; ties go to the even neighbour (76.5 -> 76)
    pub fn rounded_percent(&self) -> i64 {
        self.percent.round_ties_even() as i64
    }
}

/// Used and total capacity of memory or a storage volume, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Usage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl Usage {
    pub fn new(used_bytes: u64, total_bytes: u64) -> Self {
        Self {
            used_bytes,
            total_bytes,
        }
    }

    pub fn used_gib(&self) -> f64 {
        self.used_bytes as f64 / GIB
    }

    pub fn total_gib(&self) -> f64 {
        self.total_bytes as f64 / GIB
    }

    pub fn percent(&self) -> f64 {
        if self.total_bytes > 0 {
            (self.used_bytes as f64 / self.total_bytes as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Options chosen on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub show_private_ip: bool,
    pub show_public_ip: bool,
}

/// Every metric gathered during one run.
///
/// Optional fields are `None` when the host does not expose the fact; such
/// facts never produce a row.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSnapshot {
    pub os: OsIdentity,
    pub user: UserHost,
    pub uptime: Duration,
    pub session: Option<String>,
    pub cpu: CpuSample,
    pub cpu_temperature: Option<f64>,
    pub battery: Option<BatteryStatus>,
    pub memory: Usage,
    pub disk: Option<Usage>,
    pub private_ip: Option<IpAddr>,
    pub public_ip: Option<String>,
}
