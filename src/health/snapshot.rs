use super::battery::BatteryReport;
use super::memory::MemoryReport;

// Fixed alert thresholds. Deliberately not configurable.
pub const CPU_ALERT_PERCENT: f64 = 80.0;
pub const MEMORY_ALERT_PERCENT: u64 = 75;
pub const BATTERY_ALERT_PERCENT: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    HighCpu,
    HighMemory,
    LowBattery,
}

impl Alert {
    pub fn message(self) -> &'static str {
        match self {
            Alert::HighCpu => "Alert: CPU load is above 80%!",
            Alert::HighMemory => "Alert: Memory usage is above 75%!",
            Alert::LowBattery => "Alert: Battery is below 20%!",
        }
    }
}

/// One complete read of host health: every metric that could be read, plus
/// the alerts it triggered. A `None` metric was unavailable at read time.
#[derive(Debug, Clone)]
pub struct HealthSnapshot {
    pub hostname: String,
    pub cpu_load_percent: Option<f64>,
    pub memory: Option<MemoryReport>,
    pub battery: Option<BatteryReport>,
    pub alerts: Vec<Alert>,
}

impl HealthSnapshot {
    pub fn has_alert(&self, alert: Alert) -> bool {
        self.alerts.contains(&alert)
    }
}

/// Walks the fixed thresholds over whatever metrics are present.
/// Unavailable metrics are never evaluated, so they cannot alert.
pub fn evaluate_alerts(
    cpu_load_percent: Option<f64>,
    memory: Option<&MemoryReport>,
    battery: Option<&BatteryReport>,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(cpu) = cpu_load_percent
        && cpu > CPU_ALERT_PERCENT
    {
        alerts.push(Alert::HighCpu);
    }

    if let Some(memory) = memory
        && memory.load_percent > MEMORY_ALERT_PERCENT
    {
        alerts.push(Alert::HighMemory);
    }

    // The unknown sentinel (255) is never below the threshold, so an
    // unreadable charge level cannot trip the alert.
    if let Some(battery) = battery
        && battery.life_percent < BATTERY_ALERT_PERCENT
    {
        alerts.push(Alert::LowBattery);
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::battery::LIFE_UNKNOWN;

    fn memory_with_load(load_percent: u64) -> MemoryReport {
        MemoryReport {
            load_percent,
            total_phys: 0,
            avail_phys: 0,
            total_page_file: 0,
            avail_page_file: 0,
            total_virtual: 0,
            avail_virtual: 0,
        }
    }

    #[test]
    fn cpu_alert_is_strictly_above_eighty() {
        assert!(evaluate_alerts(Some(80.0), None, None).is_empty());
        assert_eq!(
            evaluate_alerts(Some(80.1), None, None),
            vec![Alert::HighCpu]
        );
    }

    #[test]
    fn memory_alert_is_strictly_above_seventy_five() {
        assert!(evaluate_alerts(None, Some(&memory_with_load(75)), None).is_empty());
        assert_eq!(
            evaluate_alerts(None, Some(&memory_with_load(76)), None),
            vec![Alert::HighMemory]
        );
    }

    #[test]
    fn battery_alert_is_strictly_below_twenty() {
        let low = BatteryReport { life_percent: 19 };
        let ok = BatteryReport { life_percent: 20 };
        assert_eq!(
            evaluate_alerts(None, None, Some(&low)),
            vec![Alert::LowBattery]
        );
        assert!(evaluate_alerts(None, None, Some(&ok)).is_empty());
    }

    #[test]
    fn unknown_battery_level_never_alerts() {
        let unknown = BatteryReport {
            life_percent: LIFE_UNKNOWN,
        };
        assert!(evaluate_alerts(None, None, Some(&unknown)).is_empty());
    }

    #[test]
    fn unavailable_metrics_never_alert() {
        assert!(evaluate_alerts(None, None, None).is_empty());
    }

    #[test]
    fn all_three_alerts_stack_in_order() {
        let memory = memory_with_load(90);
        let battery = BatteryReport { life_percent: 5 };
        assert_eq!(
            evaluate_alerts(Some(95.0), Some(&memory), Some(&battery)),
            vec![Alert::HighCpu, Alert::HighMemory, Alert::LowBattery]
        );
    }
}
