//! STEP/DIR driver configuration from TOML.

use serde::Deserialize;

use super::units::DelayUnit;

/// Settings for the GPIO step driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Width of the STEP high pulse in nanoseconds.
    #[serde(default = "default_pulse_width_ns")]
    pub pulse_width_ns: u32,

    /// Unit of the delay values in the speed configuration.
    #[serde(default)]
    pub delay_unit: DelayUnit,
}

fn default_pulse_width_ns() -> u32 {
    2_000
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            invert_direction: false,
            pulse_width_ns: default_pulse_width_ns(),
            delay_unit: DelayUnit::default(),
        }
    }
}

impl DriverConfig {
    /// Wall-clock step interval for a delay value, in nanoseconds.
    #[inline]
    pub fn interval_ns(&self, delay: u32) -> u32 {
        self.delay_unit.to_nanos(delay)
    }
}
