//! Motion configuration - root configuration structure.

use serde::Deserialize;

use super::driver::DriverConfig;
use super::speed::SpeedConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Ramp delays.
    pub speed: SpeedConfig,

    /// Step driver settings.
    #[serde(default)]
    pub driver: DriverConfig,
}

impl MotionConfig {
    /// Create a configuration with default driver settings.
    pub fn new(speed: SpeedConfig) -> Self {
        Self {
            speed,
            driver: DriverConfig::default(),
        }
    }

    /// Shortest step interval of any move, in nanoseconds.
    #[inline]
    pub fn min_interval_ns(&self) -> u32 {
        self.driver.interval_ns(self.speed.stop_delay)
    }
}
