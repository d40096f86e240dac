use crate::core::system_info::types::Usage;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

pub fn collect() -> Usage {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
    let sys = System::new_with_specifics(refresh);

    Usage::new(sys.used_memory(), sys.total_memory())
}
