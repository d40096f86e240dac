use super::support::{ScriptedHost, NOW};
use richfetch::core::aggregator::aggregate;
use richfetch::core::system_info::collect_snapshot;
use richfetch::ui::{render, RowKind};
use richfetch::utils::icons;
use richfetch::{FetchError, FetchOptions};
use std::io;
use std::time::Duration;

fn all_ips() -> FetchOptions {
    FetchOptions {
        show_private_ip: true,
        show_public_ip: true,
    }
}

#[test]
fn test_full_featured_host_rows() {
    let list = aggregate(&ScriptedHost::laptop(), &all_ips(), NOW, &mut io::sink()).unwrap();

    assert_eq!(
        list.kinds(),
        vec![
            RowKind::Identity,
            RowKind::Os,
            RowKind::CpuName,
            RowKind::CpuUsage,
            RowKind::Temperature,
            RowKind::Battery,
            RowKind::Session,
            RowKind::Uptime,
            RowKind::Memory,
            RowKind::Disk,
            RowKind::PrivateIp,
            RowKind::PublicIp,
            RowKind::Footer,
        ]
    );

    assert_eq!(list.get(RowKind::Identity).unwrap().value_text(), "ada@engine");
    assert_eq!(list.get(RowKind::Session).unwrap().value_text(), "plasma");
    assert_eq!(list.get(RowKind::Uptime).unwrap().value_text(), "2 hrs, 5 mins");
    assert_eq!(
        list.get(RowKind::Memory).unwrap().value_text(),
        "8.00 / 16.00 GB (50.00%)"
    );
    assert_eq!(list.get(RowKind::Battery).unwrap().value_text(), "58%");
    assert_eq!(list.get(RowKind::PrivateIp).unwrap().value_text(), "10.0.0.12");
    assert_eq!(list.get(RowKind::PublicIp).unwrap().value_text(), "198.51.100.4");
}

#[test]
fn test_temperature_uses_priority_sensor() {
    let list = aggregate(&ScriptedHost::laptop(), &FetchOptions::default(), NOW, &mut io::sink()).unwrap();
    let row = list.get(RowKind::Temperature).unwrap();
    assert_eq!(row.value_text(), format!("63.0{}", icons::DEGREES_CELSIUS));
    assert_eq!(row.label.color, Some(colored::Color::Yellow));
}

#[test]
fn test_missing_hardware_drops_rows() {
    let options = FetchOptions::default();
    let full = aggregate(&ScriptedHost::laptop(), &options, NOW, &mut io::sink()).unwrap();
    let bare = aggregate(&ScriptedHost::headless_desktop(), &options, NOW, &mut io::sink()).unwrap();

    assert!(bare.get(RowKind::Battery).is_none());
    assert!(bare.get(RowKind::Temperature).is_none());
    assert!(bare.get(RowKind::Session).is_none());
    assert_eq!(bare.len(), full.len() - 3);

    colored::control::set_override(false);
    let text = render(&bare);
    assert!(!text.contains(icons::THERMOMETER));
    assert!(!text.contains(icons::BATTERY_CHARGING));
    assert!(!text.contains(icons::BATTERY_DISCHARGING));
    assert!(!text.contains("None"));
}

#[test]
fn test_ip_rows_only_when_requested() {
    let list = aggregate(&ScriptedHost::laptop(), &FetchOptions::default(), NOW, &mut io::sink()).unwrap();
    assert!(list.get(RowKind::PrivateIp).is_none());
    assert!(list.get(RowKind::PublicIp).is_none());

    let options = FetchOptions {
        show_private_ip: true,
        show_public_ip: false,
    };
    let list = aggregate(&ScriptedHost::laptop(), &options, NOW, &mut io::sink()).unwrap();
    assert!(list.get(RowKind::PrivateIp).is_some());
    assert!(list.get(RowKind::PublicIp).is_none());
}

#[test]
fn test_network_failures_are_not_fatal() {
    let mut host = ScriptedHost::laptop();
    host.private_ip = None;
    host.public_ip = None;

    let mut diagnostics = Vec::new();
    let list = aggregate(&host, &all_ips(), NOW, &mut diagnostics).unwrap();
    assert!(list.get(RowKind::PrivateIp).is_none());
    assert!(list.get(RowKind::PublicIp).is_none());
    assert_eq!(list.rows().last().unwrap().kind, RowKind::Footer);
    assert!(list.get(RowKind::Disk).is_some());

    let messages = String::from_utf8(diagnostics).unwrap();
    let lines: Vec<&str> = messages.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Error retrieving private IP address: Network error: Network is unreachable",
            "Error retrieving public IP address: Network error: dns error: failed to lookup address",
        ]
    );
}

#[test]
fn test_public_ip_failure_alone_is_reported() {
    let mut host = ScriptedHost::laptop();
    host.public_ip = None;

    let mut diagnostics = Vec::new();
    let list = aggregate(&host, &all_ips(), NOW, &mut diagnostics).unwrap();
    assert_eq!(list.get(RowKind::PrivateIp).unwrap().value_text(), "10.0.0.12");
    assert!(list.get(RowKind::PublicIp).is_none());

    let messages = String::from_utf8(diagnostics).unwrap();
    assert!(messages.starts_with("Error retrieving public IP address: "));
    assert!(!messages.contains("private"));
}

#[test]
fn test_successful_run_has_no_diagnostics() {
    let mut diagnostics = Vec::new();
    aggregate(&ScriptedHost::headless_desktop(), &all_ips(), NOW, &mut diagnostics).unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn test_battery_errors_are_treated_as_absent() {
    let mut host = ScriptedHost::laptop();
    host.battery_fails = true;

    let snapshot = collect_snapshot(&host, &FetchOptions::default(), NOW, &mut io::sink()).unwrap();
    assert_eq!(snapshot.battery, None);
}

#[test]
fn test_missing_username_is_fatal() {
    let mut host = ScriptedHost::laptop();
    host.username = None;

    let result = aggregate(&host, &FetchOptions::default(), NOW, &mut io::sink());
    assert!(matches!(result, Err(FetchError::Identity(_))));
}

#[test]
fn test_missing_os_identity_is_fatal() {
    let mut host = ScriptedHost::laptop();
    host.os_name = None;

    let result = aggregate(&host, &FetchOptions::default(), NOW, &mut io::sink());
    assert!(matches!(result, Err(FetchError::OsIdentity(_))));
}

#[test]
fn test_unknown_distro_gets_default_icon() {
    let mut host = ScriptedHost::laptop();
    host.os_name = Some("Some Unknown Distro 99".to_string());

    let list = aggregate(&host, &FetchOptions::default(), NOW, &mut io::sink()).unwrap();
    let row = list.get(RowKind::Os).unwrap();
    assert_eq!(row.label.text, icons::DEFAULT_OS_GLYPH.symbol);
    assert_eq!(row.value_text(), "Some Unknown Distro 99");
}

#[test]
fn test_uptime_from_boot_time() {
    let snapshot =
        collect_snapshot(&ScriptedHost::laptop(), &FetchOptions::default(), NOW, &mut io::sink()).unwrap();
    assert_eq!(snapshot.uptime, Duration::from_secs(2 * 3600 + 5 * 60 + 30));
}

#[test]
fn test_output_is_deterministic() {
    colored::control::set_override(false);
    let host = ScriptedHost::laptop();

    let first = render(&aggregate(&host, &all_ips(), NOW, &mut io::sink()).unwrap());
    let second = render(&aggregate(&host, &all_ips(), NOW, &mut io::sink()).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_rendered_lines() {
    colored::control::set_override(false);
    let host = ScriptedHost::headless_desktop();
    let text = render(&aggregate(&host, &FetchOptions::default(), NOW, &mut io::sink()).unwrap());
    let lines: Vec<&str> = text.split('\n').collect();

    // leading blank, 8 rows, trailing blank, then the empty tail after the last newline
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], format!("  {}  ada@engine", icons::USER));
    assert_eq!(lines[2], format!("  \u{f08c7}  Arch Linux"));
    assert!(lines[1..9].iter().all(|line| line.starts_with("  ")));
    assert_eq!(lines[9], "");
    assert_eq!(lines[10], "");
}
