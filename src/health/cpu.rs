/// Cumulative idle/total CPU time counters, monotonically non-decreasing
/// since an arbitrary epoch (typically boot). Units are platform-defined;
/// only the deltas between consecutive samples matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSample {
    pub idle: u64,
    pub total: u64,
}

/// Converts consecutive cumulative tick samples into an instantaneous CPU
/// load fraction.
///
/// Each call measures the interval since the previous call on the same
/// estimator. The very first call measures since the counter epoch, so on a
/// host that has been up for a while it reads close to the boot-average
/// complement rather than the current load. That matches the behavior of
/// sampling monitors that need a baseline read before reporting; callers
/// wanting a true interval should sample twice.
#[derive(Debug, Default)]
pub struct CpuLoadEstimator {
    prev_idle: u64,
    prev_total: u64,
}

impl CpuLoadEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fraction of time in `[0.0, 1.0]` the CPU spent non-idle
    /// between the previous sample and this one, then stores the sample as
    /// the new baseline.
    ///
    /// A zero total delta (same sample twice, or a source that did not
    /// advance) reports full load: the idle fraction of an empty interval
    /// is taken as zero.
    pub fn estimate(&mut self, sample: TickSample) -> f64 {
        let total_delta = sample.total.wrapping_sub(self.prev_total);
        let idle_delta = sample.idle.wrapping_sub(self.prev_idle);

        let idle_fraction = if total_delta > 0 {
            idle_delta as f64 / total_delta as f64
        } else {
            0.0
        };

        self.prev_total = sample.total;
        self.prev_idle = sample.idle;

        1.0 - idle_fraction
    }
}
