use crate::core::system_info::types::OsIdentity;
use crate::error::{FetchError, Result};
use std::fs;
use std::path::Path;

/// Files consulted for the freedesktop os-release descriptor, in order
pub const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

pub fn collect() -> Result<OsIdentity> {
    #[cfg(target_os = "macos")]
    {
        let version = sysinfo::System::os_version()
            .ok_or_else(|| FetchError::os_identity("macOS version is unavailable"))?;
        Ok(macos(&version))
    }

    #[cfg(windows)]
    {
        let version = sysinfo::System::os_version()
            .ok_or_else(|| FetchError::os_identity("Windows version is unavailable"))?;
        Ok(windows(&version))
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    {
        let name = read_pretty_name(&OS_RELEASE_PATHS)?;
        Ok(from_pretty_name(name))
    }
}

pub fn macos(version: &str) -> OsIdentity {
    OsIdentity {
        display_name: format!("macOS {}", version),
        icon_key: "macOS".to_string(),
    }
}

pub fn windows(version: &str) -> OsIdentity {
    OsIdentity {
        display_name: format!("Windows {}", version),
        icon_key: "Windows".to_string(),
    }
}

pub fn from_pretty_name(name: String) -> OsIdentity {
    OsIdentity {
        icon_key: name.clone(),
        display_name: name,
    }
}

/// Reads `PRETTY_NAME` from the first candidate file that has one
pub fn read_pretty_name<P: AsRef<Path>>(candidates: &[P]) -> Result<String> {
    for path in candidates {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                if let Some(name) = parse_pretty_name(&content) {
                    return Ok(name);
                }
                log::debug!("{} has no PRETTY_NAME", path.display());
            }
            Err(e) => log::debug!("Cannot read {}: {}", path.display(), e),
        }
    }

    Err(FetchError::os_identity(
        "no os-release file with a PRETTY_NAME entry was found",
    ))
}

/// Extracts the `PRETTY_NAME` value from os-release content
pub fn parse_pretty_name(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| key.trim() == "PRETTY_NAME")
        .map(|(_, value)| unquote(value.trim()))
        .find(|value| !value.is_empty())
}

fn unquote(value: &str) -> String {
    let stripped = ['"', '\'']
        .iter()
        .find_map(|&q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)));

    match stripped {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => value.to_string(),
    }
}
