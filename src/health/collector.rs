use sysinfo::System;
use tracing::debug;

use super::battery::SystemBattery;
use super::cpu::CpuLoadEstimator;
use super::memory::SysinfoMemory;
use super::platform::SystemTicks;
use super::snapshot::{HealthSnapshot, evaluate_alerts};
use super::{BatteryProbe, MemoryProbe, TickSource};

pub type SystemCollector = Collector<SystemTicks, SysinfoMemory, SystemBattery>;

/// The snapshot builder. Owns the CPU estimator and its baseline state
/// exclusively; nothing else touches the estimator between collects.
pub struct Collector<T, M, B> {
    hostname: String,
    estimator: CpuLoadEstimator,
    ticks: T,
    memory: M,
    battery: B,
}

impl SystemCollector {
    /// Collector wired to the real OS probes.
    pub fn system() -> Self {
        let hostname = System::host_name().unwrap_or_else(|| "unknown host".into());
        Collector::new(hostname, SystemTicks, SysinfoMemory::new(), SystemBattery::new())
    }
}

impl<T, M, B> Collector<T, M, B>
where
    T: TickSource,
    M: MemoryProbe,
    B: BatteryProbe,
{
    pub fn new(hostname: String, ticks: T, memory: M, battery: B) -> Self {
        Self {
            hostname,
            estimator: CpuLoadEstimator::new(),
            ticks,
            memory,
            battery,
        }
    }

    /// Takes one synchronous snapshot: CPU, memory, battery, then alerts.
    /// No retries. A probe failure degrades only its own section; in
    /// particular a failed tick read leaves the estimator baseline alone,
    /// so the next successful read still measures a real interval.
    pub fn collect(&mut self) -> HealthSnapshot {
        let cpu_load_percent = match self.ticks.cumulative_ticks() {
            Ok(sample) => Some(self.estimator.estimate(sample) * 100.0),
            Err(err) => {
                debug!(%err, "tick source failed");
                None
            }
        };

        let memory = match self.memory.memory_status() {
            Ok(report) => Some(report),
            Err(err) => {
                debug!(%err, "memory probe failed");
                None
            }
        };

        let battery = match self.battery.battery_status() {
            Ok(report) => Some(report),
            Err(err) => {
                debug!(%err, "battery probe failed");
                None
            }
        };

        let alerts = evaluate_alerts(cpu_load_percent, memory.as_ref(), battery.as_ref());

        HealthSnapshot {
            hostname: self.hostname.clone(),
            cpu_load_percent,
            memory,
            battery,
            alerts,
        }
    }
}
