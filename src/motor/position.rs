//! Position tracking for stepper motors.
//!
//! Tracks the logical step count together with the delay currently in force.

use crate::config::SpeedConfig;
use crate::motion::Direction;

/// Motor position tracker.
///
/// Owned by the caller across moves and lent to one executor at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Current position in steps (from origin)
    current: i64,
    /// Current per-step delay
    delay: u32,
}

impl Position {
    /// Create a position tracker at a specific position and delay.
    #[inline]
    pub const fn at(current: i64, delay: u32) -> Self {
        Self { current, delay }
    }

    /// Create a position tracker at rest: delay set to `start_delay`.
    #[inline]
    pub fn at_rest(current: i64, config: &SpeedConfig) -> Self {
        Self::at(current, config.start_delay)
    }

    /// Get current position in steps.
    #[inline]
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Get the delay currently in force.
    #[inline]
    pub fn delay(&self) -> u32 {
        self.delay
    }

    /// Set position in steps.
    #[inline]
    pub fn set_current(&mut self, steps: i64) {
        self.current = steps;
    }

    /// Set current position as the new origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.current = 0;
    }

    /// Check if the delay lies in the idle range of `config`.
    #[inline]
    pub fn is_idle_delay(&self, config: &SpeedConfig) -> bool {
        (config.stop_delay..=config.start_delay).contains(&self.delay)
    }

    #[inline]
    pub(crate) fn set_delay(&mut self, delay: u32) {
        self.delay = delay;
    }

    /// Move one step in `direction`.
    #[inline]
    pub(crate) fn advance(&mut self, direction: Direction) {
        self.current = self.current.wrapping_add(direction.sign());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_tracking() {
        let mut pos = Position::at(0, 100);

        pos.advance(Direction::Positive);
        pos.advance(Direction::Positive);
        assert_eq!(pos.current(), 2);

        pos.advance(Direction::Negative);
        assert_eq!(pos.current(), 1);

        pos.set_origin();
        assert_eq!(pos.current(), 0);
        assert_eq!(pos.delay(), 100);
    }

    #[test]
    fn test_at_rest() {
        let config = SpeedConfig::new(100, 10, 2).unwrap();
        let pos = Position::at_rest(-25, &config);

        assert_eq!(pos.current(), -25);
        assert_eq!(pos.delay(), 100);
        assert!(pos.is_idle_delay(&config));
        assert!(!Position::at(0, 5).is_idle_delay(&config));
    }
}
