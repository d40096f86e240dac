//! Turns collected metrics into the ordered display list.
//!
//! Row order is fixed: identity, OS, CPU name, CPU usage, temperature,
//! battery, session, uptime, memory, disk, private IP, public IP, footer.
//! Optional rows are skipped when their metric is absent.

use crate::core::severity::{classify_temperature, classify_usage};
use crate::core::system_info::provider::MetricsProvider;
use crate::core::system_info::types::{BatteryStatus, FetchOptions, FetchSnapshot, Usage};
use crate::core::system_info::{collect_snapshot, uptime};
use crate::error::Result;
use crate::ui::display::{DisplayList, DisplayRow, RowKind, Span};
use crate::utils::icons::{self, resolve_os_icon};
use colored::Color;
use std::io::Write;
use std::time::Duration;

/// Collect metrics from `provider` and build the display list.
/// Failed optional lookups are described on `diagnostics`.
pub fn aggregate<P, W>(
    provider: &P,
    options: &FetchOptions,
    now: i64,
    diagnostics: &mut W,
) -> Result<DisplayList>
where
    P: MetricsProvider + ?Sized,
    W: Write + ?Sized,
{
    let snapshot = collect_snapshot(provider, options, now, diagnostics)?;
    Ok(build_display_list(&snapshot))
}

pub fn build_display_list(snapshot: &FetchSnapshot) -> DisplayList {
    let mut list = DisplayList::new();

    list.push(DisplayRow::new(
        RowKind::Identity,
        Span::colored(icons::USER, Color::Green),
        vec![Span::colored(snapshot.user.display(), Color::Green)],
    ));

    let os_glyph = resolve_os_icon(&snapshot.os.icon_key);
    list.push(DisplayRow::new(
        RowKind::Os,
        Span::colored(os_glyph.symbol, os_glyph.color),
        vec![Span::plain(snapshot.os.display_name.clone())],
    ));

    list.push(DisplayRow::new(
        RowKind::CpuName,
        Span::colored(icons::CPU, Color::Blue),
        vec![Span::plain(snapshot.cpu.brand.clone())],
    ));

    let cpu_usage = snapshot.cpu.usage_percent;
    list.push(DisplayRow::new(
        RowKind::CpuUsage,
        Span::colored(icons::CPU, classify_usage(cpu_usage).color()),
        vec![Span::plain(format!("{:.1}%", cpu_usage))],
    ));

    list.push_some(snapshot.cpu_temperature.map(|celsius| {
        DisplayRow::new(
            RowKind::Temperature,
            Span::colored(icons::THERMOMETER, classify_temperature(celsius).color()),
            vec![Span::plain(format_temperature(celsius))],
        )
    }));

    list.push_some(snapshot.battery.as_ref().map(battery_row));

    list.push_some(snapshot.session.as_ref().map(|session| {
        DisplayRow::new(
            RowKind::Session,
            Span::colored(icons::SESSION, Color::Red),
            vec![Span::plain(session.clone())],
        )
    }));

    list.push(DisplayRow::new(
        RowKind::Uptime,
        Span::colored(icons::UPTIME, Color::Magenta),
        vec![Span::plain(format_uptime(snapshot.uptime))],
    ));

    list.push(usage_row(RowKind::Memory, icons::MEMORY, &snapshot.memory));

    list.push_some(
        snapshot
            .disk
            .as_ref()
            .map(|disk| usage_row(RowKind::Disk, icons::DISK, disk)),
    );

    list.push_some(snapshot.private_ip.map(|ip| {
        DisplayRow::new(
            RowKind::PrivateIp,
            Span::colored(icons::NETWORK, Color::Green),
            vec![Span::plain(ip.to_string())],
        )
    }));

    list.push_some(snapshot.public_ip.as_ref().map(|ip| {
        DisplayRow::new(
            RowKind::PublicIp,
            Span::colored(icons::NETWORK, Color::Green),
            vec![Span::plain(ip.clone())],
        )
    }));

    list.push(footer_row());

    list
}

fn battery_row(battery: &BatteryStatus) -> DisplayRow {
    let glyph = if battery.plugged {
        icons::BATTERY_CHARGING
    } else {
        icons::BATTERY_DISCHARGING
    };

    DisplayRow::new(
        RowKind::Battery,
        Span::colored(glyph, Color::Green),
        vec![Span::plain(format!("{}%", battery.rounded_percent()))],
    )
}

fn usage_row(kind: RowKind, glyph: &'static str, usage: &Usage) -> DisplayRow {
    DisplayRow::new(
        kind,
        Span::colored(glyph, classify_usage(usage.percent()).color()),
        vec![Span::plain(format_usage(usage))],
    )
}

fn footer_row() -> DisplayRow {
    let value = icons::FOOTER
        .iter()
        .map(|glyph| Span::colored(format!("{} ", glyph.symbol), glyph.color))
        .collect();

    DisplayRow::new(RowKind::Footer, Span::plain(" "), value)
}

/// Format uptime as whole hours and remaining whole minutes
pub fn format_uptime(uptime: Duration) -> String {
    let (hours, minutes) = uptime::split_hours_minutes(uptime);
    format!("{} hrs, {} mins", hours, minutes)
}

/// Format used/total capacity in GiB with the used percentage
pub fn format_usage(usage: &Usage) -> String {
    format!(
        "{:.2} / {:.2} GB ({:.2}%)",
        usage.used_gib(),
        usage.total_gib(),
        usage.percent()
    )
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}{}", celsius, icons::DEGREES_CELSIUS)
}
