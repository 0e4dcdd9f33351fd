use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::health::memory::whole_gb;
use crate::health::snapshot::{Alert, HealthSnapshot};

/// Renders the health report. Line order is fixed contract: header, CPU,
/// memory, battery, completion. A section whose metric was unavailable
/// renders an advisory line in its slot instead of dropping out.
pub fn render_report(snapshot: &HealthSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("System Health Check for {}\n\n", snapshot.hostname));

    match snapshot.cpu_load_percent {
        Some(cpu) => {
            out.push_str(&format!("CPU Load: {cpu:.1}%\n"));
            if snapshot.has_alert(Alert::HighCpu) {
                out.push_str(Alert::HighCpu.message());
                out.push('\n');
            }
        }
        None => out.push_str("Unable to get CPU load.\n"),
    }

    match &snapshot.memory {
        Some(memory) => {
            out.push_str(&format!("Memory Load: {} percent\n", memory.load_percent));
            out.push_str(&format!(
                "Total Physical Memory: {} GB\n",
                whole_gb(memory.total_phys)
            ));
            out.push_str(&format!(
                "Free Physical Memory: {} GB\n",
                whole_gb(memory.avail_phys)
            ));
            out.push_str(&format!(
                "Total Page File: {} GB\n",
                whole_gb(memory.total_page_file)
            ));
            out.push_str(&format!(
                "Free Page File: {} GB\n",
                whole_gb(memory.avail_page_file)
            ));
            out.push_str(&format!(
                "Total Virtual Memory: {} GB\n",
                whole_gb(memory.total_virtual)
            ));
            out.push_str(&format!(
                "Free Virtual Memory: {} GB\n",
                whole_gb(memory.avail_virtual)
            ));
            if snapshot.has_alert(Alert::HighMemory) {
                out.push_str(Alert::HighMemory.message());
                out.push('\n');
            }
        }
        None => out.push_str("Unable to get memory status.\n"),
    }

    match &snapshot.battery {
        Some(battery) => {
            out.push_str(&format!("Battery Life: {}%\n", battery.life_percent));
            if snapshot.has_alert(Alert::LowBattery) {
                out.push_str(Alert::LowBattery.message());
                out.push('\n');
            }
        }
        None => out.push_str("Unable to get battery status.\n"),
    }

    out.push_str("System health check completed.\n");
    out
}

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::battery::BatteryReport;
    use crate::health::memory::MemoryReport;
    use crate::health::snapshot::evaluate_alerts;

    fn snapshot(
        cpu_load_percent: Option<f64>,
        memory: Option<MemoryReport>,
        battery: Option<BatteryReport>,
    ) -> HealthSnapshot {
        let alerts = evaluate_alerts(cpu_load_percent, memory.as_ref(), battery.as_ref());
        HealthSnapshot {
            hostname: "testhost".into(),
            cpu_load_percent,
            memory,
            battery,
            alerts,
        }
    }

    fn full_memory() -> MemoryReport {
        const GB: u64 = 1 << 30;
        MemoryReport {
            load_percent: 50,
            total_phys: 8 * GB,
            avail_phys: 4 * GB,
            total_page_file: 2 * GB,
            avail_page_file: GB,
            total_virtual: 10 * GB,
            avail_virtual: 5 * GB,
        }
    }

    #[test]
    fn healthy_report_renders_every_line_in_order() {
        let report = render_report(&snapshot(
            Some(43.25),
            Some(full_memory()),
            Some(BatteryReport { life_percent: 80 }),
        ));

        let expected = "System Health Check for testhost\n\
                        \n\
                        CPU Load: 43.2%\n\
                        Memory Load: 50 percent\n\
                        Total Physical Memory: 8 GB\n\
                        Free Physical Memory: 4 GB\n\
                        Total Page File: 2 GB\n\
                        Free Page File: 1 GB\n\
                        Total Virtual Memory: 10 GB\n\
                        Free Virtual Memory: 5 GB\n\
                        Battery Life: 80%\n\
                        System health check completed.\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn alert_lines_follow_their_sections() {
        let report = render_report(&snapshot(
            Some(95.0),
            Some(MemoryReport {
                load_percent: 76,
                ..full_memory()
            }),
            Some(BatteryReport { life_percent: 10 }),
        ));

        let lines: Vec<&str> = report.lines().collect();
        let cpu = lines
            .iter()
            .position(|l| l.starts_with("CPU Load:"))
            .unwrap();
        assert_eq!(lines[cpu + 1], "Alert: CPU load is above 80%!");

        let free_virtual = lines
            .iter()
            .position(|l| l.starts_with("Free Virtual Memory:"))
            .unwrap();
        assert_eq!(lines[free_virtual + 1], "Alert: Memory usage is above 75%!");

        let battery = lines
            .iter()
            .position(|l| l.starts_with("Battery Life:"))
            .unwrap();
        assert_eq!(lines[battery + 1], "Alert: Battery is below 20%!");
    }

    #[test]
    fn memory_load_of_seventy_five_does_not_alert() {
        let report = render_report(&snapshot(
            None,
            Some(MemoryReport {
                load_percent: 75,
                ..full_memory()
            }),
            None,
        ));
        assert!(!report.contains("Alert: Memory usage is above 75%!"));
    }

    #[test]
    fn unavailable_battery_renders_advisory_and_no_numeric_line() {
        let report = render_report(&snapshot(Some(10.0), Some(full_memory()), None));
        assert!(report.contains("Unable to get battery status.\n"));
        assert!(!report.contains("Battery Life:"));
        assert!(!report.contains("Alert: Battery is below 20%!"));
    }

    #[test]
    fn section_order_holds_when_everything_is_unavailable() {
        let report = render_report(&snapshot(None, None, None));
        let expected = "System Health Check for testhost\n\
                        \n\
                        Unable to get CPU load.\n\
                        Unable to get memory status.\n\
                        Unable to get battery status.\n\
                        System health check completed.\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn truncate_shortens_wide_strings_with_ellipsis() {
        assert_eq!(truncate_unicode("short", 10), "short");
        let truncated = truncate_unicode("a very long report line", 8);
        assert!(truncated.width() <= 8);
        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn format_bytes_picks_the_right_unit() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2 KB");
        assert_eq!(format_bytes(8_589_934_592), "8.0 GB");
    }
}
