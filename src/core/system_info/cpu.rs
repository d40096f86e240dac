use crate::core::system_info::types::CpuSample;
use sysinfo::{CpuRefreshKind, RefreshKind, System, MINIMUM_CPU_UPDATE_INTERVAL};

pub fn collect() -> CpuSample {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh);

    // Usage is a delta between two refreshes
    sys.refresh_cpu_usage();
    std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_usage();

    let brand = match sys.cpus().first() {
        Some(cpu) => cpu.brand().trim().to_string(),
        None => {
            log::warn!("No CPUs reported by the platform");
            get_fallback().brand
        }
    };

    CpuSample {
        brand,
        usage_percent: f64::from(sys.global_cpu_usage()),
    }
}

pub fn get_fallback() -> CpuSample {
    CpuSample {
        brand: "Unknown".to_string(),
        usage_percent: 0.0,
    }
}
