//! CPU temperature lookup.
//!
//! Many platforms (Windows in particular) expose no sensor table at all, so
//! an empty result is normal and never reported as an error.

use crate::core::system_info::types::SensorReading;
use sysinfo::Components;

/// Sensor chips known to report the CPU temperature, in lookup order
pub const CPU_SENSORS: [&str; 7] = [
    "coretemp",
    "k10temp",
    "cpu-thermal",
    "lm_sensors",
    "asus-nb",
    "lm75",
    "acpitz",
];

/// Reads every temperature sensor the platform exposes
pub fn read_sensors() -> Vec<SensorReading> {
    let components = Components::new_with_refreshed_list();

    components
        .list()
        .iter()
        .filter_map(|comp| {
            let celsius = comp.temperature()?;
            Some(SensorReading {
                chip: chip_name(comp.label()).to_string(),
                label: comp.label().to_string(),
                celsius: f64::from(celsius),
            })
        })
        .collect()
}

/// Chip part of a component label such as "k10temp Tctl"
pub fn chip_name(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or("")
}

/// First reading of the highest-priority CPU sensor present in `readings`
pub fn pick_cpu_temperature(readings: &[SensorReading]) -> Option<f64> {
    CPU_SENSORS.iter().find_map(|sensor| {
        readings
            .iter()
            .find(|reading| reading.chip == *sensor && reading.celsius.is_finite())
            .map(|reading| {
                log::debug!("CPU temperature from sensor '{}'", reading.label);
                reading.celsius
            })
    })
}
