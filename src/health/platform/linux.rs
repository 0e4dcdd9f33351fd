use crate::health::Unavailable;
use crate::health::cpu::TickSample;

pub fn read_cumulative_ticks() -> Result<TickSample, Unavailable> {
    let contents = std::fs::read_to_string("/proc/stat").map_err(|_| Unavailable("cpu"))?;
    parse_proc_stat(&contents).ok_or(Unavailable("cpu"))
}

/// Parses the aggregate "cpu " line of /proc/stat.
///
/// Fields: user nice system idle iowait irq softirq steal [guest guest_nice].
/// Idle counts idle + iowait; total sums the first eight fields (guest time
/// is already folded into user/nice by the kernel).
fn parse_proc_stat(contents: &str) -> Option<TickSample> {
    let line = contents.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse().ok())
        .collect::<Option<_>>()?;
    if fields.len() < 4 {
        return None;
    }

    let idle = fields[3] + fields.get(4).copied().unwrap_or(0);
    let total = fields.iter().take(8).sum();
    Some(TickSample { idle, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aggregate_cpu_line() {
        let stat = "cpu  100 20 30 400 50 6 7 8 0 0\n\
                    cpu0 50 10 15 200 25 3 3 4 0 0\n\
                    intr 123456\n";
        let sample = parse_proc_stat(stat).unwrap();
        assert_eq!(sample.idle, 450);
        assert_eq!(sample.total, 621);
    }

    #[test]
    fn tolerates_short_kernels_without_steal_fields() {
        let stat = "cpu  100 0 50 300\n";
        let sample = parse_proc_stat(stat).unwrap();
        assert_eq!(sample.idle, 300);
        assert_eq!(sample.total, 450);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_proc_stat("intr 42\n").is_none());
        assert!(parse_proc_stat("cpu  one two three four\n").is_none());
    }
}
