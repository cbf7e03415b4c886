//! Speed configuration for the ramp planner.

use serde::Deserialize;

use crate::error::ConfigError;

/// Delay settings shared by every move of a session.
///
/// Delay is the inverse of speed: `start_delay` is the slowest step
/// interval (used at both ends of a move) and `stop_delay` the fastest.
/// During a ramp the delay changes by `step_delay` per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedConfig {
    /// Delay at the start and end of a move (slowest speed).
    pub start_delay: u32,

    /// Delay at peak speed (fastest).
    pub stop_delay: u32,

    /// Delay change per step while accelerating or decelerating.
    pub step_delay: u32,
}

impl SpeedConfig {
    /// Create a validated speed configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `stop_delay` or `step_delay` is zero, or
    /// if `start_delay` is not strictly greater than `stop_delay`.
    pub fn new(start_delay: u32, stop_delay: u32, step_delay: u32) -> Result<Self, ConfigError> {
        let config = Self {
            start_delay,
            stop_delay,
            step_delay,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the delay ordering and increments.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stop_delay == 0 {
            return Err(ConfigError::InvalidStopDelay(self.stop_delay));
        }

        if self.start_delay <= self.stop_delay {
            return Err(ConfigError::InvalidSpeedRange {
                start_delay: self.start_delay,
                stop_delay: self.stop_delay,
            });
        }

        if self.step_delay == 0 {
            return Err(ConfigError::InvalidStepDelay(self.step_delay));
        }

        Ok(())
    }

    /// Number of steps needed to ramp fully from `start_delay` to `stop_delay`.
    ///
    /// Uses truncating division: when `step_delay` does not divide the range
    /// evenly, the ramp stops short of `stop_delay` rather than overshooting it.
    /// Returns 0 for configurations that fail [`validate`](Self::validate).
    #[inline]
    pub fn max_ramp_steps(&self) -> u64 {
        match self.start_delay.checked_sub(self.stop_delay) {
            Some(range) if self.step_delay > 0 => u64::from(range / self.step_delay),
            _ => 0,
        }
    }

    /// Lowest delay a full ramp actually reaches.
    ///
    /// Equal to `stop_delay` when `step_delay` divides the range evenly,
    /// otherwise slightly above it.
    #[inline]
    pub fn peak_delay(&self) -> u32 {
        let ramp = self.max_ramp_steps() as u32;
        self.start_delay
            .saturating_sub(ramp.saturating_mul(self.step_delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_ramp_steps() {
        let config = SpeedConfig::new(100, 10, 2).unwrap();
        assert_eq!(config.max_ramp_steps(), 45);
        assert_eq!(config.peak_delay(), 10);
    }

    #[test]
    fn test_max_ramp_steps_truncates() {
        // 90 / 4 = 22.5
        let config = SpeedConfig::new(100, 10, 4).unwrap();
        assert_eq!(config.max_ramp_steps(), 22);
        assert_eq!(config.peak_delay(), 12);
    }

    #[test]
    fn test_step_larger_than_range() {
        let config = SpeedConfig::new(20, 10, 50).unwrap();
        assert_eq!(config.max_ramp_steps(), 0);
        assert_eq!(config.peak_delay(), 20);
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert_eq!(
            SpeedConfig::new(10, 100, 2),
            Err(ConfigError::InvalidSpeedRange {
                start_delay: 10,
                stop_delay: 100
            })
        );
        assert!(matches!(
            SpeedConfig::new(10, 10, 2),
            Err(ConfigError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_delays() {
        assert_eq!(
            SpeedConfig::new(100, 0, 2),
            Err(ConfigError::InvalidStopDelay(0))
        );
        assert_eq!(
            SpeedConfig::new(100, 10, 0),
            Err(ConfigError::InvalidStepDelay(0))
        );
    }

    #[test]
    fn test_invalid_config_has_no_ramp() {
        let config = SpeedConfig {
            start_delay: 5,
            stop_delay: 10,
            step_delay: 1,
        };
        assert_eq!(config.max_ramp_steps(), 0);
    }
}
