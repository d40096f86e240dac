//! Threshold classification for usage and temperature metrics.
//!
//! Every value falls into exactly one band. Lower bounds are inclusive, so a
//! reading sitting exactly on a threshold belongs to the higher band.

use colored::Color;

/// Usage (%) at or above which a metric is a warning
pub const USAGE_WARNING: f64 = 60.0;
/// Usage (%) at or above which a metric is critical
pub const USAGE_CRITICAL: f64 = 80.0;
/// Temperature (°C) at or above which the CPU is a warning
pub const TEMP_WARNING: f64 = 60.0;
/// Temperature (°C) at or above which the CPU is critical
pub const TEMP_CRITICAL: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    /// Color token used when presenting this severity
    pub fn color_token(self) -> &'static str {
        match self {
            Severity::Normal => "green",
            Severity::Warning => "yellow",
            Severity::Critical => "red",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Severity::Normal => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Critical => Color::Red,
        }
    }
}

fn classify(value: f64, warning: f64, critical: f64) -> Severity {
    if value >= critical {
        Severity::Critical
    } else if value >= warning {
        Severity::Warning
    } else {
        // NaN lands here too
        Severity::Normal
    }
}

/// Classify a usage percentage (CPU, memory, disk)
pub fn classify_usage(percent: f64) -> Severity {
    classify(percent, USAGE_WARNING, USAGE_CRITICAL)
}

/// Classify a CPU temperature in degrees Celsius
pub fn classify_temperature(celsius: f64) -> Severity {
    classify(celsius, TEMP_WARNING, TEMP_CRITICAL)
}
