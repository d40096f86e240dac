//! Glyph utilities
//!
//! This module maps operating system names to Nerd Font glyphs and holds
//! the fixed glyphs used to label each fetch row.

use colored::Color;

/// A decorative icon together with the color it is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub color: Color,
}

impl Glyph {
    pub const fn new(symbol: &'static str, color: Color) -> Self {
        Self { symbol, color }
    }
}

/// Glyph used when an OS name has no dedicated icon
pub const DEFAULT_OS_GLYPH: Glyph = Glyph::new("\u{e712}", Color::Yellow);

pub const USER: &str = "\u{f415}";
pub const CPU: &str = "\u{ec19}";
pub const THERMOMETER: &str = "\u{f2c9}";
pub const DEGREES_CELSIUS: &str = "\u{f0504}";
pub const BATTERY_CHARGING: &str = "\u{f0084}";
pub const BATTERY_DISCHARGING: &str = "\u{f12a3}";
pub const SESSION: &str = "\u{f0a07}";
pub const UPTIME: &str = "\u{f252}";
pub const MEMORY: &str = "\u{e266}";
pub const DISK: &str = "\u{f0c7}";
pub const NETWORK: &str = "\u{f0a69}";

/// Symbols and colors of the decorative footer, drawn left to right
pub const FOOTER: [Glyph; 6] = [
    Glyph::new("\u{f169d}", Color::Red),
    Glyph::new("\u{f169f}", Color::Yellow),
    Glyph::new("\u{f16a3}", Color::Green),
    Glyph::new("\u{f06a9}", Color::Blue),
    Glyph::new("\u{f1719}", Color::Cyan),
    Glyph::new("\u{f16a5}", Color::Magenta),
];

/// Returns the glyph for an operating system name
///
/// Matching is exact: case and version suffixes are significant, and any
/// name without an entry gets [`DEFAULT_OS_GLYPH`].
///
/// # Examples
///
/// ```
/// use richfetch::utils::icons::{resolve_os_icon, DEFAULT_OS_GLYPH};
///
/// assert_eq!(resolve_os_icon("Arch Linux").symbol, "\u{f08c7}");
/// assert_eq!(resolve_os_icon("arch linux"), DEFAULT_OS_GLYPH);
/// ```
pub fn resolve_os_icon(os_name: &str) -> Glyph {
    match os_name {
        "Alpine Linux" => Glyph::new("\u{f300}", Color::Blue),
        "Arch Linux" => Glyph::new("\u{f08c7}", Color::Blue),
        "Artix Linux" => Glyph::new("\u{f31f}", Color::Blue),
        "CentOS Stream 9" => Glyph::new("\u{ef3d}", Color::Yellow),
        "Debian GNU/Linux 11 Bullseye" => Glyph::new("\u{f306}", Color::Red),
        "Deepin" => Glyph::new("\u{f321}", Color::Blue),
        "Elementary OS 7: Loki" => Glyph::new("\u{f309}", Color::Blue),
        "EndeavourOS" => Glyph::new("\u{f322}", Color::Magenta),
        "Fedora Linux" => Glyph::new("\u{f30a}", Color::Blue),
        "FreeBSD" => Glyph::new("\u{f28f}", Color::Red),
        "Garuda Linux" => Glyph::new("\u{f337}", Color::Yellow),
        "Gentoo Linux" => Glyph::new("\u{f08e8}", Color::White),
        "Hyperbola GNU/Linux-libre" => Glyph::new("\u{f33a}", Color::Blue),
        "Kali Linux" => Glyph::new("\u{f327}", Color::Blue),
        "KDE Neon" => Glyph::new("\u{f331}", Color::Blue),
        "Kubuntu" => Glyph::new("\u{f333}", Color::Blue),
        "Linux Mint 21 Cinnamon" => Glyph::new("\u{f08ed}", Color::Green),
        "Lubuntu" => Glyph::new("\u{f363}", Color::Blue),
        "macOS" => Glyph::new("\u{e711}", Color::White),
        "Mageia" => Glyph::new("\u{f310}", Color::Blue),
        "Manjaro Linux" => Glyph::new("\u{f312}", Color::Green),
        "MX Linux" => Glyph::new("\u{f33f}", Color::White),
        "NixOS" => Glyph::new("\u{f313}", Color::Blue),
        "openSUSE Leap 15.4" | "openSUSE Tumbleweed" => Glyph::new("\u{f314}", Color::Green),
        "Parabola GNU/Linux-libre" => Glyph::new("\u{f340}", Color::Blue),
        "Parrot Security OS" => Glyph::new("\u{f329}", Color::Green),
        "Pop!_OS 22.04" => Glyph::new("\u{f32a}", Color::Blue),
        "PostmarketOS" => Glyph::new("\u{f374}", Color::Green),
        "Puppy Linux" => Glyph::new("\u{f341}", Color::White),
        "Qubes OS" => Glyph::new("\u{f342}", Color::Blue),
        "Raspberry Pi OS" => Glyph::new("\u{ef5c}", Color::Red),
        "Red Hat Enterprise Linux" => Glyph::new("\u{f316}", Color::Red),
        "Slackware Linux" => Glyph::new("\u{f318}", Color::Blue),
        "Solus" => Glyph::new("\u{f32d}", Color::Blue),
        "Tails" => Glyph::new("\u{f343}", Color::Magenta),
        "Ubuntu 22.04 LTS" => Glyph::new("\u{e73a}", Color::Yellow),
        "Ubuntu Budgie" => Glyph::new("\u{f320}", Color::Magenta),
        "Vanilla OS" => Glyph::new("\u{f366}", Color::Yellow),
        "Void Linux" => Glyph::new("\u{f32e}", Color::Green),
        "Windows" => Glyph::new("\u{e70f}", Color::Blue),
        "Xubuntu" => Glyph::new("\u{f368}", Color::Blue),
        "Zorin OS" => Glyph::new("\u{f32f}", Color::Blue),
        _ => DEFAULT_OS_GLYPH,
    }
}
