use crate::core::system_info::types::Usage;
use std::path::Path;
use sysinfo::Disks;

/// Usage of the root (Unix) or system (Windows) volume
pub fn root_volume() -> Option<Usage> {
    let disks = Disks::new_with_refreshed_list();
    let volumes = disks.list().iter().map(|disk| {
        let total = disk.total_space();
        let used = total.saturating_sub(disk.available_space());
        (disk.mount_point(), Usage::new(used, total))
    });

    select_root(volumes, &root_mount_point())
}

#[cfg(windows)]
fn root_mount_point() -> String {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    format!("{}\\", drive.trim_end_matches('\\'))
}

#[cfg(not(windows))]
fn root_mount_point() -> String {
    "/".to_string()
}

/// Picks the volume mounted at `root`, falling back to the first volume listed
pub fn select_root<'a, I>(volumes: I, root: &str) -> Option<Usage>
where
    I: IntoIterator<Item = (&'a Path, Usage)>,
{
    let mut first = None;
    for (mount_point, usage) in volumes {
        if mount_point == Path::new(root) {
            return Some(usage);
        }
        if first.is_none() {
            first = Some(usage);
        }
    }

    if first.is_some() {
        log::debug!("No volume mounted at {}, using the first one listed", root);
    }
    first
}
