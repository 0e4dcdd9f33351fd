use super::cpu::TickSample;
use super::{TickSource, Unavailable};

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

/// Whole-machine cumulative tick counters read from the OS.
pub struct SystemTicks;

impl TickSource for SystemTicks {
    fn cumulative_ticks(&mut self) -> Result<TickSample, Unavailable> {
        read_cumulative_ticks()
    }
}

#[cfg(any(target_os = "linux", target_os = "windows"))]
pub fn read_cumulative_ticks() -> Result<TickSample, Unavailable> {
    platform_impl::read_cumulative_ticks()
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
pub fn read_cumulative_ticks() -> Result<TickSample, Unavailable> {
    Err(Unavailable("cpu"))
}

#[cfg(all(test, any(target_os = "linux", target_os = "windows")))]
mod tests {
    use super::*;

    #[test]
    fn system_counters_are_monotone_across_reads() {
        let first = read_cumulative_ticks().expect("tick read failed");
        let second = read_cumulative_ticks().expect("tick read failed");
        assert!(second.total >= first.total);
        assert!(second.idle >= first.idle);
        assert!(first.idle <= first.total);
    }
}
