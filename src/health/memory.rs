use sysinfo::System;

use super::{MemoryProbe, Unavailable};

pub const BYTES_PER_GB: u64 = 1 << 30;

/// Memory load plus the six capacity figures the report prints. All
/// quantities are bytes; rendering truncates to whole GB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReport {
    /// Integer percent of physical memory in use, 0-100.
    pub load_percent: u64,
    pub total_phys: u64,
    pub avail_phys: u64,
    pub total_page_file: u64,
    pub avail_page_file: u64,
    pub total_virtual: u64,
    pub avail_virtual: u64,
}

/// Truncating conversion to whole gigabytes; anything under 1 GB reads 0.
pub fn whole_gb(bytes: u64) -> u64 {
    bytes / BYTES_PER_GB
}

/// Memory probe backed by sysinfo. Page file maps to swap; virtual is the
/// commitment limit analog, physical plus swap.
pub struct SysinfoMemory {
    sys: System,
}

impl Default for SysinfoMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoMemory {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl MemoryProbe for SysinfoMemory {
    fn memory_status(&mut self) -> Result<MemoryReport, Unavailable> {
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(Unavailable("memory"));
        }
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        let swap_total = self.sys.total_swap();
        let swap_free = self.sys.free_swap();

        Ok(MemoryReport {
            load_percent: used * 100 / total,
            total_phys: total,
            avail_phys: available,
            total_page_file: swap_total,
            avail_page_file: swap_free,
            total_virtual: total + swap_total,
            avail_virtual: available + swap_free,
        })
    }
}
