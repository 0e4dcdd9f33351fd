// Host health probes and the snapshot builder.

pub mod battery;
pub mod collector;
pub mod cpu;
pub mod memory;
pub mod platform;
pub mod snapshot;

use thiserror::Error;

use crate::health::battery::BatteryReport;
use crate::health::cpu::TickSample;
use crate::health::memory::MemoryReport;

/// The only error kind a probe can produce. Never fatal: the snapshot
/// builder converts it into an advisory line for the affected section and
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} status unavailable")]
pub struct Unavailable(pub &'static str);

/// Supplies raw cumulative idle/total tick counters from the OS.
pub trait TickSource {
    fn cumulative_ticks(&mut self) -> Result<TickSample, Unavailable>;
}

/// Supplies memory load and capacity figures.
pub trait MemoryProbe {
    fn memory_status(&mut self) -> Result<MemoryReport, Unavailable>;
}

/// Supplies the battery charge level.
pub trait BatteryProbe {
    fn battery_status(&mut self) -> Result<BatteryReport, Unavailable>;
}
