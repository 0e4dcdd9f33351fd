use battery::units::ratio::percent;
use tracing::debug;

use super::{BatteryProbe, Unavailable};

/// Sentinel for "charge level not known" (battery present but the charge
/// could not be read). Mirrors the Win32 `BATTERY_LIFE_PERCENT` encoding
/// the report format grew up with: values of 100 and above mean unknown.
pub const LIFE_UNKNOWN: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryReport {
    /// Remaining charge percent, or `LIFE_UNKNOWN`.
    pub life_percent: u8,
}

impl BatteryReport {
    pub fn is_known(&self) -> bool {
        self.life_percent <= 100
    }
}

/// Battery probe backed by the `battery` crate. Reports the first battery
/// the manager enumerates; hosts without one read as unavailable.
pub struct SystemBattery {
    manager: Option<battery::Manager>,
}

impl Default for SystemBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBattery {
    pub fn new() -> Self {
        let manager = match battery::Manager::new() {
            Ok(manager) => Some(manager),
            Err(err) => {
                debug!(error = %err, "battery manager init failed");
                None
            }
        };
        Self { manager }
    }
}

impl BatteryProbe for SystemBattery {
    fn battery_status(&mut self) -> Result<BatteryReport, Unavailable> {
        let manager = self.manager.as_ref().ok_or(Unavailable("battery"))?;
        let mut batteries = manager.batteries().map_err(|err| {
            debug!(error = %err, "battery enumeration failed");
            Unavailable("battery")
        })?;

        match batteries.next() {
            Some(Ok(bat)) => {
                let charge = bat.state_of_charge().get::<percent>();
                let life_percent = if charge.is_finite() && (0.0..=100.0).contains(&charge) {
                    charge.round() as u8
                } else {
                    LIFE_UNKNOWN
                };
                Ok(BatteryReport { life_percent })
            }
            Some(Err(err)) => {
                debug!(error = %err, "battery read failed");
                Err(Unavailable("battery"))
            }
            None => Err(Unavailable("battery")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_overrange_values_are_unknown() {
        assert!(!BatteryReport { life_percent: LIFE_UNKNOWN }.is_known());
        assert!(!BatteryReport { life_percent: 101 }.is_known());
    }

    #[test]
    fn ordinary_charge_levels_are_known() {
        assert!(BatteryReport { life_percent: 0 }.is_known());
        assert!(BatteryReport { life_percent: 100 }.is_known());
    }
}
